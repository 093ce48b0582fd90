//! Avatar upload progress as shown under the profile picture.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadProgress {
    pub percent: u8,
    pub failed: bool,
    pub done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Uploading(u8),
    Uploaded,
    Failed,
}

/// `round(100 * transferred / total)`, clamped to 0..=100.
pub fn percent_of(transferred: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (transferred as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

impl UploadProgress {
    /// Fresh state for a newly chosen file.
    pub fn started() -> Self {
        Self::default()
    }

    /// Record a progress event. The percentage never goes backwards within one upload.
    pub fn with_progress(&self, transferred: u64, total: u64) -> Self {
        Self {
            percent: self.percent.max(percent_of(transferred, total)),
            ..self.clone()
        }
    }

    pub fn completed(&self) -> Self {
        Self {
            percent: 100,
            failed: false,
            done: true,
        }
    }

    pub fn failed(&self) -> Self {
        Self {
            failed: true,
            ..self.clone()
        }
    }

    pub fn status(&self) -> UploadStatus {
        if self.failed {
            UploadStatus::Failed
        } else if self.percent == 100 {
            UploadStatus::Uploaded
        } else if self.percent > 0 {
            UploadStatus::Uploading(self.percent)
        } else {
            UploadStatus::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_to_nearest() {
        assert_eq!(percent_of(0, 200), 0);
        assert_eq!(percent_of(1, 200), 1); // 0.5 rounds away from zero
        assert_eq!(percent_of(333, 1000), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1000, 1000), 100);
        assert_eq!(percent_of(5, 0), 0);
    }

    #[test]
    fn test_progress_is_non_decreasing() {
        let events = [(10, 100), (40, 100), (30, 100), (90, 100), (90, 100)];
        let mut progress = UploadProgress::started();
        let mut seen = Vec::new();
        for (sent, total) in events {
            progress = progress.with_progress(sent, total);
            seen.push(progress.percent);
        }
        assert_eq!(seen, vec![10, 40, 40, 90, 90]);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_status_transitions() {
        let progress = UploadProgress::started();
        assert_eq!(progress.status(), UploadStatus::Idle);

        let progress = progress.with_progress(1, 4);
        assert_eq!(progress.status(), UploadStatus::Uploading(25));

        assert_eq!(progress.completed().status(), UploadStatus::Uploaded);
        assert_eq!(progress.failed().status(), UploadStatus::Failed);
    }

    #[test]
    fn test_new_file_resets_failure() {
        let failed = UploadProgress::started().with_progress(1, 2).failed();
        assert!(failed.failed);
        let next = UploadProgress::started();
        assert!(!next.failed);
        assert_eq!(next.percent, 0);
    }
}
