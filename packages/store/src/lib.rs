pub mod clock;
pub mod config;
pub mod forms;
pub mod listings;
pub mod models;
pub mod notice;
pub mod session;
pub mod upload;

pub use clock::{Clock, EpochMillis, ManualClock, SystemClock};
pub use config::{ApiConfig, ClientConfig, NoticeConfig, UploadConfig};
pub use forms::{FormError, ProfileDraft, ProfileUpdate, SignInForm, SignUpForm};
pub use listings::ListingsPanel;
pub use models::{ListingSummary, UserInfo};
pub use notice::{Notice, NoticeKind};
pub use session::{reduce, SessionAction, SessionState};
pub use upload::{UploadProgress, UploadStatus};
