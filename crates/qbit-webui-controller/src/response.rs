//! Interpretation of raw daemon responses, one function per endpoint.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use qbit_webui_types::{DaemonError, FileInfo, TorrentInfo};

use crate::ops::RawResponse;

/// Body prefix the daemon answers with when a command was accepted ("Ok.").
/// Rejections carry another text, e.g. "Fails.", usually with status 200 as well.
pub(crate) const OK_SENTINEL: &[u8] = b"Ok";

fn is_ok_body(body: &[u8]) -> bool {
    body.starts_with(OK_SENTINEL)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DaemonError> {
    serde_json::from_slice(body).map_err(|e| DaemonError::Decode(e.to_string()))
}

fn expect_ok_status(
    response: &RawResponse,
    context: impl FnOnce() -> String,
) -> Result<(), DaemonError> {
    if response.status == StatusCode::OK {
        Ok(())
    } else {
        Err(DaemonError::Protocol {
            context: context(),
            status: response.status.as_u16(),
        })
    }
}

/// The probe only looks at the status: 403 means the session is not valid.
pub(crate) fn interpret_probe(response: &RawResponse) -> bool {
    response.status == StatusCode::OK
}

/// Login is judged by its body, the daemon answers 200 on rejected credentials.
pub(crate) fn interpret_login(
    response: &RawResponse,
    endpoint: &str,
) -> Result<(), DaemonError> {
    if is_ok_body(&response.body) {
        Ok(())
    } else {
        Err(DaemonError::Unauthorized {
            endpoint: endpoint.to_owned(),
        })
    }
}

pub(crate) fn interpret_add(response: &RawResponse, link: &str) -> Result<(), DaemonError> {
    if response.status == StatusCode::OK && is_ok_body(&response.body) {
        Ok(())
    } else {
        Err(DaemonError::Protocol {
            context: format!("failed to add torrent {link}"),
            status: response.status.as_u16(),
        })
    }
}

/// Exactly one torrent must carry `tag`.
pub(crate) fn interpret_info(
    response: &RawResponse,
    tag: &str,
) -> Result<TorrentInfo, DaemonError> {
    expect_ok_status(response, || format!("failed to list torrents tagged {tag}"))?;

    let mut infos: Vec<TorrentInfo> = decode(&response.body)?;
    if infos.len() != 1 {
        return Err(DaemonError::Correlation {
            tag: tag.to_owned(),
            matches: infos.len(),
        });
    }

    let info = infos.remove(0);
    if info.hash.is_empty() {
        return Err(DaemonError::Decode(format!("torrent tagged {tag} has no hash")));
    }
    Ok(info)
}

pub(crate) fn interpret_files(
    response: &RawResponse,
    hash: &str,
) -> Result<Vec<FileInfo>, DaemonError> {
    expect_ok_status(response, || format!("failed to list files of torrent {hash}"))?;
    decode(&response.body)
}

pub(crate) fn interpret_delete(response: &RawResponse, hash: &str) -> Result<(), DaemonError> {
    expect_ok_status(response, || format!("failed to delete torrent {hash}"))
}
