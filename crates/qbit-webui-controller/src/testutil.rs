//! Shared test utilities and fixtures.

use reqwest::StatusCode;

use qbit_webui_types::{FileInfo, TorrentInfo, TorrentState};

use crate::ops::RawResponse;

pub(crate) fn make_test_info(name: &str, hash: &str) -> TorrentInfo {
    TorrentInfo {
        added_on: 1_700_000_000,
        amount_left: 500,
        availability: 1.0,
        content_path: format!("/downloads/{name}"),
        dlspeed: 2048,
        downloaded: 500,
        eta: 60,
        hash: hash.to_string(),
        magnet_uri: format!("magnet:?xt=urn:btih:{hash}"),
        max_ratio: -1.0,
        name: name.to_string(),
        num_seeds: 3,
        priority: 1,
        progress: 0.5,
        ratio_limit: -2.0,
        save_path: "/downloads".to_string(),
        size: 1000,
        state: TorrentState::Downloading,
        tags: "alist-42".to_string(),
        total_size: 1000,
        ..Default::default()
    }
}

pub(crate) fn make_test_files() -> Vec<FileInfo> {
    vec![
        FileInfo {
            index: 0,
            name: "show/episode-01.mkv".to_string(),
            size: 900,
            progress: 0.5,
            priority: 1,
            is_seed: false,
            piece_range: vec![0, 8],
            availability: 1.0,
        },
        FileInfo {
            index: 1,
            name: "show/episode-01.ass".to_string(),
            size: 100,
            progress: 1.0,
            priority: 1,
            is_seed: false,
            piece_range: vec![8, 9],
            availability: 1.0,
        },
    ]
}

pub(crate) fn text_response(status: StatusCode, body: &str) -> RawResponse {
    RawResponse {
        status,
        body: body.as_bytes().to_vec(),
    }
}

/// What the daemon answers to an accepted login or add.
pub(crate) fn ok_response() -> RawResponse {
    text_response(StatusCode::OK, "Ok.")
}

pub(crate) fn forbidden_response() -> RawResponse {
    text_response(StatusCode::FORBIDDEN, "Forbidden")
}

pub(crate) fn info_response(infos: &[TorrentInfo]) -> RawResponse {
    RawResponse {
        status: StatusCode::OK,
        body: serde_json::to_vec(infos).unwrap(),
    }
}

pub(crate) fn files_response(files: &[FileInfo]) -> RawResponse {
    RawResponse {
        status: StatusCode::OK,
        body: serde_json::to_vec(files).unwrap(),
    }
}
