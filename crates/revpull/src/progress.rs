//! Progress bar utilities
//!
//! Page-level progress for a harvesting run.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over the configured page budget
pub fn page_bar(max_pages: u64) -> ProgressBar {
    let pb = ProgressBar::new(max_pages);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} pages")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    pb.set_message("Fetching reviews".to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bar_length() {
        let pb = page_bar(10);
        assert_eq!(pb.length(), Some(10));
    }
}
