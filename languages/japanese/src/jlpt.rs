/// Approximate JLPT level of a kanji
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JlptLevel {
    N5, // Beginner
    N4, // Elementary
    N3, // Intermediate
    N2, // Upper intermediate
    N1, // Advanced
}

impl JlptLevel {
    /// Bucket a KANJIDIC school grade.
    ///
    /// Grades 1-6 are kyōiku kanji, 8 is the rest of jōyō, 9 and 10 are
    /// jinmeiyō. Grade 7 is unused by KANJIDIC and maps to nothing.
    pub fn from_grade(grade: Option<u8>) -> Option<Self> {
        match grade? {
            0..=2 => Some(JlptLevel::N5),
            3..=4 => Some(JlptLevel::N4),
            5..=6 => Some(JlptLevel::N3),
            8 => Some(JlptLevel::N2),
            9.. => Some(JlptLevel::N1),
            7 => None,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    /// Label used in API responses, "N/A" when unknown
    pub fn label(level: Option<Self>) -> String {
        level.map_or("N/A", |l| l.as_str()).to_string()
    }
}
