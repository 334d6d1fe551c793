//! Background music control.
//!
//! Playback is best effort: the webview may refuse to start audio, or no
//! source may be configured. An attempt resolves to a [`PlaybackOutcome`]
//! and the UI mirrors that outcome; a blocked attempt is logged and
//! otherwise ignored.

use dioxus::prelude::*;
use serde::Deserialize;

/// DOM id of the looping audio element.
pub const AUDIO_ELEMENT_ID: &str = "bgm";

/// Result of a playback attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The element reported playback underway.
    Started,
    /// The element refused, with the runtime's reason.
    Blocked(String),
}

/// Reply shape sent back from the webview by the play script.
#[derive(Debug, Deserialize)]
struct PlayReply {
    ok: bool,
    #[serde(default)]
    reason: Option<String>,
}

/// Attempts to start playback of the audio element.
pub async fn try_play() -> PlaybackOutcome {
    let js = format!(
        r#"
        const el = document.getElementById('{id}');
        if (!el || !el.currentSrc) {{
            dioxus.send({{ ok: false, reason: 'no audio source' }});
        }} else {{
            el.play()
                .then(() => dioxus.send({{ ok: true }}))
                .catch((err) => dioxus.send({{ ok: false, reason: String(err) }}));
        }}
        "#,
        id = AUDIO_ELEMENT_ID
    );

    let mut eval = document::eval(&js);
    match eval.recv::<PlayReply>().await {
        Ok(PlayReply { ok: true, .. }) => PlaybackOutcome::Started,
        Ok(PlayReply { reason, .. }) => {
            PlaybackOutcome::Blocked(reason.unwrap_or_else(|| "unknown".to_string()))
        }
        Err(err) => PlaybackOutcome::Blocked(err.to_string()),
    }
}

/// Pauses playback. Pausing cannot fail in any way worth modeling.
pub fn pause() {
    document::eval(&format!(
        "var el = document.getElementById('{}'); if (el) el.pause();",
        AUDIO_ELEMENT_ID
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_decoding() {
        let ok: PlayReply = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(ok.ok);
        assert!(ok.reason.is_none());

        let blocked: PlayReply =
            serde_json::from_str(r#"{"ok": false, "reason": "NotAllowedError"}"#).unwrap();
        assert!(!blocked.ok);
        assert_eq!(blocked.reason.as_deref(), Some("NotAllowedError"));
    }
}
