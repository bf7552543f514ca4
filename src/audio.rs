// Synthesised sound cues played through the Web Audio API.

use anyhow::{Result, anyhow};
use web_sys::{AudioContext, OscillatorType};

use crate::util::js_err;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Sawtooth,
    Triangle,
}

impl Wave {
    fn oscillator_type(self) -> OscillatorType {
        match self {
            Wave::Sine => OscillatorType::Sine,
            Wave::Sawtooth => OscillatorType::Sawtooth,
            Wave::Triangle => OscillatorType::Triangle,
        }
    }
}

/// One short tone: optional pitch sweep, gain decaying exponentially to `FADE_TO`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub end_freq: Option<f32>,
    pub wave: Wave,
    pub gain: f32,
    pub duration: f64,
}

pub const FADE_TO: f32 = 0.01;

pub const HIT: Tone = Tone {
    freq: 800.0,
    end_freq: None,
    wave: Wave::Sine,
    gain: 0.3,
    duration: 0.1,
};

pub const MISS: Tone = Tone {
    freq: 200.0,
    end_freq: None,
    wave: Wave::Sawtooth,
    gain: 0.1,
    duration: 0.2,
};

pub const GAME_OVER: Tone = Tone {
    freq: 400.0,
    end_freq: Some(200.0),
    wave: Wave::Triangle,
    gain: 0.2,
    duration: 0.5,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Hit,
    Miss,
    GameOver,
}

impl Cue {
    pub fn tone(self) -> &'static Tone {
        match self {
            Cue::Hit => &HIT,
            Cue::Miss => &MISS,
            Cue::GameOver => &GAME_OVER,
        }
    }
}

/// Lazily created audio context; browsers only allow it after a user gesture.
#[derive(Default)]
pub struct Sfx {
    ctx: Option<AudioContext>,
    pub muted: bool,
}

impl Sfx {
    fn context(&mut self) -> Result<&AudioContext> {
        if self.ctx.is_none() {
            self.ctx = Some(AudioContext::new().map_err(js_err)?);
        }
        self.ctx
            .as_ref()
            .ok_or_else(|| anyhow!("audio context unavailable"))
    }

    pub fn play(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        if let Err(e) = self.try_play(cue.tone()) {
            log::warn!("sound {cue:?} failed: {e:#}");
        }
    }

    fn try_play(&mut self, tone: &Tone) -> Result<()> {
        let ctx = self.context()?;
        let osc = ctx.create_oscillator().map_err(js_err)?;
        let gain = ctx.create_gain().map_err(js_err)?;
        osc.connect_with_audio_node(&gain).map_err(js_err)?;
        gain.connect_with_audio_node(&ctx.destination()).map_err(js_err)?;

        let t = ctx.current_time();
        osc.set_type(tone.wave.oscillator_type());
        let freq = osc.frequency();
        match tone.end_freq {
            Some(end) => {
                freq.set_value_at_time(tone.freq, t).map_err(js_err)?;
                freq.exponential_ramp_to_value_at_time(end, t + tone.duration)
                    .map_err(js_err)?;
            }
            None => freq.set_value(tone.freq),
        }
        let g = gain.gain();
        g.set_value_at_time(tone.gain, t).map_err(js_err)?;
        g.exponential_ramp_to_value_at_time(FADE_TO, t + tone.duration)
            .map_err(js_err)?;

        osc.start_with_when(t).map_err(js_err)?;
        osc.stop_with_when(t + tone.duration).map_err(js_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_table() {
        assert_eq!(Cue::Hit.tone().freq, 800.0);
        assert_eq!(Cue::Miss.tone().wave, Wave::Sawtooth);
        assert_eq!(Cue::GameOver.tone().end_freq, Some(200.0));
        for cue in [Cue::Hit, Cue::Miss, Cue::GameOver] {
            let t = cue.tone();
            assert!(t.gain > FADE_TO);
            assert!(t.duration > 0.0);
        }
    }

    #[test]
    fn muted_sfx_never_touches_audio() {
        let mut sfx = Sfx {
            muted: true,
            ..Default::default()
        };
        sfx.play(Cue::Hit);
        assert!(sfx.ctx.is_none());
    }
}
