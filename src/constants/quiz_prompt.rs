pub const QUESTION_RULES: &str = "Rules:
1. Questions must be directly related to the notes content
2. Mix of multiple choice (70%) and fill-in-blank (30%)
3. Ensure progressive difficulty: the first question is easy, the last is hard
4. Focus on core concepts and understanding
5. Every multiple choice question has exactly one correct choice";

pub const OUTPUT_FORMAT_INSTRUCTION: &str =
    "Return the questions in this exact JSON format, nothing else:";
