//! Horizontal paging over forecast entries

use crate::app_data::app_data;

/// Number of forecast slides visible at `width`
pub fn visible_count(width: f32) -> usize {
    let forecast = &app_data().forecast;
    forecast
        .breakpoints
        .iter()
        .filter(|bp| width >= bp.min_width)
        .map(|bp| bp.visible)
        .last()
        .unwrap_or(forecast.default_visible)
        .max(1)
}

/// Window position over an ordered list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    offset: usize,
}

impl Pager {
    /// Back to the first entry (new data)
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    fn max_offset(len: usize, visible: usize) -> usize {
        len.saturating_sub(visible)
    }

    /// Visible slice; clamps the offset if the window grew
    pub fn window<'a, T>(&mut self, items: &'a [T], visible: usize) -> &'a [T] {
        self.offset = self.offset.min(Self::max_offset(items.len(), visible));
        let end = (self.offset + visible).min(items.len());
        &items[self.offset..end]
    }

    pub fn can_prev(&self) -> bool {
        self.offset > 0
    }

    pub fn can_next(&self, len: usize, visible: usize) -> bool {
        self.offset < Self::max_offset(len, visible)
    }

    pub fn prev(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn next(&mut self, len: usize, visible: usize) {
        if self.can_next(len, visible) {
            self.offset += 1;
        }
    }

    /// e.g. "4-6 of 40"
    pub fn position_label(&self, len: usize, visible: usize) -> String {
        if len == 0 {
            return "0 of 0".to_string();
        }
        let end = (self.offset + visible).min(len);
        format!("{}-{} of {}", self.offset + 1, end, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_count_breakpoints() {
        assert_eq!(visible_count(0.0), 3);
        assert_eq!(visible_count(639.9), 3);
        assert_eq!(visible_count(640.0), 3);
        assert_eq!(visible_count(1023.0), 3);
        assert_eq!(visible_count(1024.0), 4);
        assert_eq!(visible_count(1279.0), 4);
        assert_eq!(visible_count(1280.0), 5);
        assert_eq!(visible_count(4000.0), 5);
    }

    #[test]
    fn test_windows_over_forty_entries() {
        let entries: Vec<u32> = (0..40).collect();

        for (width, visible) in [(500.0, 3), (800.0, 3), (1100.0, 4), (1400.0, 5)] {
            let count = visible_count(width);
            assert_eq!(count, visible);

            let mut pager = Pager::default();
            let mut seen = Vec::new();
            seen.extend_from_slice(pager.window(&entries, count));
            while pager.can_next(entries.len(), count) {
                pager.next(entries.len(), count);
                let window = pager.window(&entries, count);
                assert_eq!(window.len(), count);
                seen.push(*window.last().unwrap());
            }

            // Every entry reachable, in chronological order
            assert_eq!(seen, entries);
            assert_eq!(pager.offset, 40 - count);
        }
    }

    #[test]
    fn test_navigation_bounds() {
        let mut pager = Pager::default();
        assert!(!pager.can_prev());
        pager.prev();
        assert_eq!(pager.offset, 0);

        pager.next(5, 3);
        pager.next(5, 3);
        pager.next(5, 3);
        assert_eq!(pager.offset, 2);
        assert!(!pager.can_next(5, 3));
        assert!(pager.can_prev());
    }

    #[test]
    fn test_window_clamps_when_visible_grows() {
        let entries: Vec<u32> = (0..10).collect();
        let mut pager = Pager::default();
        for _ in 0..7 {
            pager.next(entries.len(), 3);
        }
        assert_eq!(pager.offset, 7);

        let window = pager.window(&entries, 5);
        assert_eq!(window, &[5, 6, 7, 8, 9]);
        assert_eq!(pager.offset, 5);
    }

    #[test]
    fn test_short_list() {
        let entries = [1, 2];
        let mut pager = Pager::default();
        assert_eq!(pager.window(&entries, 5), &[1, 2]);
        assert!(!pager.can_next(entries.len(), 5));

        let empty: [u32; 0] = [];
        assert!(pager.window(&empty, 3).is_empty());
        assert_eq!(pager.position_label(0, 3), "0 of 0");
    }

    #[test]
    fn test_position_label() {
        let mut pager = Pager::default();
        assert_eq!(pager.position_label(40, 3), "1-3 of 40");
        pager.next(40, 3);
        assert_eq!(pager.position_label(40, 3), "2-4 of 40");
    }
}
