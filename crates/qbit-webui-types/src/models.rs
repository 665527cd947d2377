// Field names follow the qBittorrent WebUI API v2 `torrents/info` and `torrents/files`
// responses. Fields that older daemons omit fall back to their defaults.

use serde::{Deserialize, Serialize};

/// Torrent lifecycle state as reported by the daemon.
///
/// States this crate does not know decode to [`TorrentState::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum TorrentState {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "missingFiles")]
    MissingFiles,
    #[serde(rename = "uploading")]
    Uploading,
    #[serde(rename = "pausedUP")]
    PausedUp,
    #[serde(rename = "stoppedUP")]
    StoppedUp,
    #[serde(rename = "queuedUP")]
    QueuedUp,
    #[serde(rename = "stalledUP")]
    StalledUp,
    #[serde(rename = "checkingUP")]
    CheckingUp,
    #[serde(rename = "forcedUP")]
    ForcedUp,
    #[serde(rename = "allocating")]
    Allocating,
    #[serde(rename = "downloading")]
    Downloading,
    #[serde(rename = "metaDL")]
    MetaDl,
    #[serde(rename = "forcedMetaDL")]
    ForcedMetaDl,
    #[serde(rename = "pausedDL")]
    PausedDl,
    #[serde(rename = "stoppedDL")]
    StoppedDl,
    #[serde(rename = "queuedDL")]
    QueuedDl,
    #[serde(rename = "stalledDL")]
    StalledDl,
    #[serde(rename = "checkingDL")]
    CheckingDl,
    #[serde(rename = "forcedDL")]
    ForcedDl,
    #[serde(rename = "checkingResumeData")]
    CheckingResumeData,
    #[serde(rename = "moving")]
    Moving,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl TorrentState {
    /// The daemon's name for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::MissingFiles => "missingFiles",
            Self::Uploading => "uploading",
            Self::PausedUp => "pausedUP",
            Self::StoppedUp => "stoppedUP",
            Self::QueuedUp => "queuedUP",
            Self::StalledUp => "stalledUP",
            Self::CheckingUp => "checkingUP",
            Self::ForcedUp => "forcedUP",
            Self::Allocating => "allocating",
            Self::Downloading => "downloading",
            Self::MetaDl => "metaDL",
            Self::ForcedMetaDl => "forcedMetaDL",
            Self::PausedDl => "pausedDL",
            Self::StoppedDl => "stoppedDL",
            Self::QueuedDl => "queuedDL",
            Self::StalledDl => "stalledDL",
            Self::CheckingDl => "checkingDL",
            Self::ForcedDl => "forcedDL",
            Self::CheckingResumeData => "checkingResumeData",
            Self::Moving => "moving",
            Self::Unknown => "unknown",
        }
    }
}

/// Snapshot of one remote torrent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)] // rationale: these are the same fields as in the WebUI API
pub struct TorrentInfo {
    /// Unix time the torrent was added.
    pub added_on: i64,

    pub amount_left: i64,

    pub auto_tmm: bool,

    pub availability: f64,

    pub category: String,

    pub completed: i64,

    /// Unix time the torrent completed.
    pub completion_on: i64,

    pub content_path: String,

    /// Bytes per second, `0` or negative when unlimited.
    pub dl_limit: i64,

    pub dlspeed: i64,

    pub downloaded: i64,

    pub downloaded_session: i64,

    pub eta: i64,

    pub f_l_piece_prio: bool,

    pub force_start: bool,

    /// Info hash, the daemon-side key of the torrent.
    pub hash: String,

    pub last_activity: i64,

    pub magnet_uri: String,

    pub max_ratio: f64,

    pub max_seeding_time: i64,

    pub name: String,

    pub num_complete: i64,

    pub num_incomplete: i64,

    pub num_leechs: i64,

    pub num_seeds: i64,

    /// Queue position, `-1` when queueing is disabled or the torrent is seeding.
    pub priority: i64,

    /// Between `0.0` and `1.0`.
    pub progress: f64,

    pub ratio: f64,

    pub ratio_limit: f64,

    pub save_path: String,

    pub seeding_time: i64,

    pub seeding_time_limit: i64,

    pub seen_complete: i64,

    pub seq_dl: bool,

    pub size: i64,

    pub state: TorrentState,

    pub super_seeding: bool,

    /// Comma separated list of tags.
    pub tags: String,

    pub time_active: i64,

    pub total_size: i64,

    pub tracker: String,

    pub trackers_count: i64,

    pub up_limit: i64,

    pub uploaded: i64,

    pub uploaded_session: i64,

    pub upspeed: i64,
}

/// One file inside a torrent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct FileInfo {
    pub index: i64,

    pub name: String,

    pub size: i64,

    pub progress: f64,

    pub priority: i32,

    /// Only reported on the first file of a seeding torrent.
    #[serde(default)]
    pub is_seed: bool,

    /// First and last piece index of the file.
    #[serde(default)]
    pub piece_range: Vec<i64>,

    #[serde(default)]
    pub availability: f64,
}
