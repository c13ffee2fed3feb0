use time::macros::format_description;
use time::OffsetDateTime;

/// Estimated reading time at 200 words per minute, never below one minute.
/// Derived from content, recomputed whenever content changes.
pub fn read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = ((words + 199) / 200).max(1);
    format!("{} min read", minutes)
}

/// Display date captured at creation, e.g. "April 4, 2025". Stored as free
/// text afterwards.
pub fn display_date(at: OffsetDateTime) -> String {
    let format = format_description!("[month repr:long] [day padding:none], [year]");
    at.format(&format)
        .unwrap_or_else(|_| at.date().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn one_word_reads_in_one_minute() {
        assert_eq!(read_time("hello"), "1 min read");
    }

    #[test]
    fn empty_content_still_reads_in_one_minute() {
        assert_eq!(read_time(""), "1 min read");
    }

    #[test]
    fn four_hundred_words_read_in_two_minutes() {
        let content = vec!["word"; 400].join(" ");
        assert_eq!(read_time(&content), "2 min read");
    }

    #[test]
    fn four_hundred_one_words_read_in_three_minutes() {
        let content = vec!["word"; 401].join(" ");
        assert_eq!(read_time(&content), "3 min read");
    }

    #[test]
    fn whitespace_runs_do_not_inflate_word_count() {
        assert_eq!(read_time("one  \n\t two   three"), "1 min read");
    }

    #[test]
    fn display_date_is_long_form() {
        assert_eq!(display_date(datetime!(2025-04-04 10:30 UTC)), "April 4, 2025");
        assert_eq!(display_date(datetime!(2025-12-25 00:00 UTC)), "December 25, 2025");
    }
}
