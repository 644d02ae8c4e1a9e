// ============================================================================
// LOG BROWSER - Sync history: search + fixed-size pagination
// ============================================================================
// Pure state: no DOM, no network. Views render `LogPage`, view-models feed
// `load()` with whatever the backend returned.
// ============================================================================

use crate::models::LogRecord;

/// Sync history view-state
#[derive(Debug, Clone, PartialEq)]
pub struct LogBrowser {
    all_logs: Vec<LogRecord>,
    filtered_logs: Vec<LogRecord>,
    current_page: usize,
    query: String,
    last_sync: Option<LogRecord>,
    page_size: usize,
}

/// Everything the history table needs for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPage {
    pub rows: Vec<LogRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based index of the first visible row, 0 when nothing matches
    pub range_start: usize,
    pub range_end: usize,
    pub total: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl LogPage {
    pub fn range_label(&self) -> String {
        format!("Showing {}-{} of {}", self.range_start, self.range_end, self.total)
    }

    pub fn prev_page(&self) -> usize {
        self.current_page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        self.current_page + 1
    }
}

impl LogBrowser {
    pub fn new(page_size: usize) -> Self {
        Self {
            all_logs: Vec::new(),
            filtered_logs: Vec::new(),
            current_page: 1,
            query: String::new(),
            last_sync: None,
            page_size: page_size.max(1),
        }
    }

    /// Replace the whole history with a fresh fetch
    ///
    /// Clears the filter. The "last sync" summary only moves when the fetch
    /// returned something; an empty fetch keeps the previous summary.
    pub fn load(&mut self, logs: Vec<LogRecord>) {
        if let Some(latest) = logs.first() {
            self.last_sync = Some(latest.clone());
        }
        self.filtered_logs = logs.clone();
        self.all_logs = logs;
        self.query.clear();
    }

    /// Keep records whose report or period contains `query` (case-insensitive)
    pub fn filter(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.filtered_logs = self
            .all_logs
            .iter()
            .filter(|log| matches_query(log, &needle))
            .cloned()
            .collect();
        self.query = query.to_string();
        self.current_page = 1;
    }

    /// Page numbers start at 1; anything past the end renders empty
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn render(&self) -> LogPage {
        let total = self.filtered_logs.len();
        let total_pages = ((total + self.page_size - 1) / self.page_size).max(1);
        let start = (self.current_page - 1).saturating_mul(self.page_size);

        let rows: Vec<LogRecord> = self
            .filtered_logs
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        LogPage {
            rows,
            current_page: self.current_page,
            total_pages,
            range_start: if total > 0 { start + 1 } else { 0 },
            range_end: self.current_page.saturating_mul(self.page_size).min(total),
            total,
            prev_disabled: self.current_page == 1,
            next_disabled: self.current_page >= total_pages,
        }
    }

    pub fn all_logs(&self) -> &[LogRecord] {
        &self.all_logs
    }

    pub fn filtered_logs(&self) -> &[LogRecord] {
        &self.filtered_logs
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_sync(&self) -> Option<&LogRecord> {
        self.last_sync.as_ref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for LogBrowser {
    fn default() -> Self {
        Self::new(crate::config::CONFIG.log_page_size)
    }
}

/// `needle` must already be lowercased
fn matches_query(log: &LogRecord, needle: &str) -> bool {
    log.report.to_lowercase().contains(needle) || log.period.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize, report: &str) -> LogRecord {
        LogRecord {
            timestamp: format!("2026-01-{:02} 10:00:00", (i % 28) + 1),
            report: report.to_string(),
            period: format!("2025{:02}", (i % 12) + 1),
            count: i as u64,
        }
    }

    fn records(n: usize) -> Vec<LogRecord> {
        (0..n)
            .map(|i| record(i, if i % 2 == 0 { "PatientGrid" } else { "VitalsReport" }))
            .collect()
    }

    fn loaded(n: usize) -> LogBrowser {
        let mut browser = LogBrowser::new(10);
        browser.load(records(n));
        browser
    }

    #[test]
    fn test_pages_concatenate_to_filtered_logs() {
        for n in [0, 1, 9, 10, 11, 25, 30, 47] {
            let mut browser = loaded(n);
            let total_pages = browser.render().total_pages;

            let mut seen = Vec::new();
            for page in 1..=total_pages {
                browser.go_to_page(page);
                seen.extend(browser.render().rows);
            }

            assert_eq!(seen, browser.filtered_logs(), "n = {}", n);
        }
    }

    #[test]
    fn test_first_and_last_page_of_25() {
        let mut browser = loaded(25);

        let first = browser.render();
        assert_eq!(first.rows, records(25)[0..10].to_vec());
        assert_eq!(first.range_label(), "Showing 1-10 of 25");
        assert_eq!(first.total_pages, 3);
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        browser.go_to_page(3);
        let last = browser.render();
        assert_eq!(last.rows, records(25)[20..25].to_vec());
        assert_eq!(last.range_label(), "Showing 21-25 of 25");
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);
    }

    #[test]
    fn test_empty_history() {
        let browser = loaded(0);
        let page = browser.render();

        assert!(page.rows.is_empty());
        assert_eq!(page.range_label(), "Showing 0-0 of 0");
        assert_eq!(page.total_pages, 1);
        assert!(page.prev_disabled);
        assert!(page.next_disabled);
    }

    #[test]
    fn test_filter_without_matches() {
        let mut browser = loaded(25);
        browser.go_to_page(2);
        browser.filter("no-such-report");

        assert!(browser.filtered_logs().is_empty());
        assert_eq!(browser.current_page(), 1);

        let page = browser.render();
        assert_eq!(page.range_label(), "Showing 0-0 of 0");
        assert!(page.prev_disabled && page.next_disabled);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut browser = loaded(30);
        browser.filter("vitals");
        let once = browser.filtered_logs().to_vec();
        browser.filter("vitals");

        assert_eq!(browser.filtered_logs(), once.as_slice());
        assert_eq!(once.len(), 15);
    }

    #[test]
    fn test_empty_filter_restores_all_logs() {
        let mut browser = loaded(30);
        browser.filter("grid");
        assert_eq!(browser.filtered_logs().len(), 15);

        browser.filter("");
        assert_eq!(browser.filtered_logs(), browser.all_logs());
    }

    #[test]
    fn test_filter_keeps_backend_order() {
        let mut browser = loaded(30);
        browser.filter("PATIENT");

        let counts: Vec<u64> = browser.filtered_logs().iter().map(|l| l.count).collect();
        let expected: Vec<u64> = (0..30).step_by(2).map(|i| i as u64).collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_filter_matches_period() {
        let mut browser = loaded(12);
        browser.filter("202503");

        assert_eq!(browser.filtered_logs().len(), 1);
        assert_eq!(browser.filtered_logs()[0].period, "202503");
    }

    #[test]
    fn test_load_replaces_and_clears_filter() {
        let mut browser = loaded(25);
        browser.filter("vitals");

        browser.load(records(3));
        assert_eq!(browser.all_logs().len(), 3);
        assert_eq!(browser.filtered_logs(), browser.all_logs());
        assert_eq!(browser.query(), "");
        assert_eq!(browser.last_sync(), Some(&records(3)[0]));
    }

    #[test]
    fn test_empty_load_keeps_last_sync() {
        let mut browser = loaded(5);
        let latest = browser.last_sync().cloned();

        browser.load(Vec::new());
        assert!(browser.all_logs().is_empty());
        assert_eq!(browser.last_sync().cloned(), latest);

        let mut fresh = LogBrowser::new(10);
        fresh.load(Vec::new());
        assert!(fresh.last_sync().is_none());
    }

    #[test]
    fn test_page_past_the_end_renders_empty() {
        let mut browser = loaded(5);
        browser.go_to_page(4);
        let page = browser.render();

        assert!(page.rows.is_empty());
        assert!(page.next_disabled);
        assert!(!page.prev_disabled);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let mut browser = loaded(15);
        browser.go_to_page(0);

        assert_eq!(browser.current_page(), 1);
        assert_eq!(browser.render().range_label(), "Showing 1-10 of 15");
    }

    #[test]
    fn test_navigation_targets() {
        let mut browser = loaded(25);
        browser.go_to_page(2);
        let page = browser.render();

        assert_eq!(page.prev_page(), 1);
        assert_eq!(page.next_page(), 3);
    }
}
