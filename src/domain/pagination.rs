use std::num::IntErrorKind;

/// Fixed number of questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-indexed page number taken from the `page` query parameter
///
/// Absent or non-integer values fall back to the first page. Values below 1
/// are kept and select nothing; integers too large for `i64` saturate, so
/// they still select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(i64);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    pub fn new(page: i64) -> Self {
        PageNumber(page)
    }

    /// Lenient parse of a raw query value
    ///
    /// # Example
    /// ```
    /// use trivia_api::domain::pagination::PageNumber;
    ///
    /// assert_eq!(PageNumber::parse(Some("3")).value(), 3);
    /// assert_eq!(PageNumber::parse(Some("abc")), PageNumber::FIRST);
    /// assert_eq!(PageNumber::parse(None), PageNumber::FIRST);
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::FIRST;
        };
        match raw.trim().parse::<i64>() {
            Ok(page) => PageNumber(page),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => PageNumber(i64::MAX),
                IntErrorKind::NegOverflow => PageNumber(i64::MIN),
                _ => Self::FIRST,
            },
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the items of this page, in order
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        if self.0 < 1 {
            return Vec::new();
        }
        let start = usize::try_from(self.0 - 1)
            .ok()
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
            .unwrap_or(usize::MAX);
        items
            .iter()
            .skip(start)
            .take(QUESTIONS_PER_PAGE)
            .cloned()
            .collect()
    }
}
