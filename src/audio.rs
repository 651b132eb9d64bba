//! Terminal stand-in for an audio device.
//!
//! Every request is logged. With the bell enabled, collision sounds ring
//! the terminal bell on the given writer.

use flappy::adapters::{AudioPlayer, Sound, Track};
use log::{debug, warn};
use std::io::Write;

const BELL: &[u8] = b"\x07";

pub struct TerminalAudio<W: Write> {
    bell: Option<W>,
}

impl<W: Write> TerminalAudio<W> {
    /// Audio sink that only logs.
    pub fn silent() -> Self {
        Self { bell: None }
    }

    /// Audio sink that also rings the bell on `out` for hits.
    pub fn with_bell(out: W) -> Self {
        Self { bell: Some(out) }
    }

    fn ring(&mut self) {
        let Some(out) = self.bell.as_mut() else {
            return;
        };
        if let Err(e) = out.write_all(BELL).and_then(|_| out.flush()) {
            warn!("terminal bell failed: {}", e);
        }
    }
}

impl<W: Write> AudioPlayer for TerminalAudio<W> {
    fn play(&mut self, sound: Sound) {
        debug!("sound: {:?}", sound);
        if sound == Sound::Hit {
            self.ring();
        }
    }

    fn play_looping(&mut self, track: Track) {
        debug!("looping track: {:?}", track);
    }
}
