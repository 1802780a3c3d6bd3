//! Sound event sink
//!
//! The simulation fires one-shot sound events; whatever is behind the sink is
//! cosmetic and must never affect the tick. On wasm32 the events drive
//! procedurally generated Web Audio effects - no sample files. Failures are
//! swallowed at the call site.

/// Sound cues emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// Direction reversal
    Tap,
    /// Platform passed; carries the new score, which picks the cosmetic
    /// variant (`score % 5`)
    Score(u32),
    /// Run ended
    Death,
}

/// Fire-and-forget sound output
pub trait SoundSink {
    fn play(&self, event: SoundEvent);
}

/// Sink that discards everything (native builds, tests)
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&self, _event: SoundEvent) {}
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioSink;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{SoundEvent, SoundSink};
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    /// Web Audio implementation with a helicopter-flavored effect set
    pub struct WebAudioSink {
        ctx: Option<AudioContext>,
    }

    impl Default for WebAudioSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudioSink {
        pub fn new() -> Self {
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Create an oscillator with a gain envelope, both wired to the output
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Single tone with an exponential fade-out, starting `at` seconds
        /// from now
        fn tone(&self, ctx: &AudioContext, freq: f32, duration: f64, kind: OscillatorType, vol: f32, at: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, kind) else {
                return;
            };
            let t = ctx.current_time() + at;
            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + duration)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + duration + 0.05).ok();
        }

        /// Rapid square-wave frequency jumps - the rotor "chop"
        fn chop_burst(&self, ctx: &AudioContext, base_freq: f32, vol: f32, at: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, base_freq, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time() + at;
            osc.frequency().set_value_at_time(base_freq, t).ok();
            osc.frequency().set_value_at_time(base_freq * 1.5, t + 0.015).ok();
            osc.frequency().set_value_at_time(base_freq * 0.8, t + 0.03).ok();
            osc.frequency().set_value_at_time(base_freq * 1.3, t + 0.045).ok();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.07)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + 0.07).ok();
        }

        fn play_tap(&self, ctx: &AudioContext) {
            self.chop_burst(ctx, 220.0, 0.1, 0.0);
            self.tone(ctx, 440.0, 0.03, OscillatorType::Square, 0.06, 0.02);
        }

        /// Five distinct passage sounds, cycled by score
        fn play_score(&self, ctx: &AudioContext, score: u32) {
            use OscillatorType::{Sawtooth, Sine, Square, Triangle};
            match score % 5 {
                0 => {
                    // Ascending whir
                    self.tone(ctx, 400.0, 0.06, Triangle, 0.12, 0.0);
                    self.tone(ctx, 600.0, 0.05, Triangle, 0.08, 0.025);
                }
                1 => {
                    // Mechanical ping
                    self.tone(ctx, 900.0, 0.05, Sine, 0.1, 0.0);
                    self.tone(ctx, 700.0, 0.04, Sine, 0.07, 0.03);
                }
                2 => {
                    // Rotor whoosh
                    self.chop_burst(ctx, 350.0, 0.08, 0.0);
                    self.tone(ctx, 550.0, 0.04, Triangle, 0.09, 0.035);
                }
                3 => {
                    // Double click
                    self.tone(ctx, 650.0, 0.03, Square, 0.08, 0.0);
                    self.tone(ctx, 800.0, 0.03, Square, 0.06, 0.04);
                }
                _ => {
                    // Turbine hum rising
                    self.tone(ctx, 300.0, 0.08, Sawtooth, 0.07, 0.0);
                    self.tone(ctx, 500.0, 0.05, Triangle, 0.1, 0.03);
                }
            }
        }

        /// Mechanical crash: impact, scraping metal, rotor winding down
        fn play_death(&self, ctx: &AudioContext) {
            use OscillatorType::{Sawtooth, Square};
            self.tone(ctx, 100.0, 0.3, Sawtooth, 0.2, 0.0);
            self.tone(ctx, 180.0, 0.15, Square, 0.15, 0.04);
            self.chop_burst(ctx, 160.0, 0.12, 0.1);
            self.tone(ctx, 60.0, 0.25, Sawtooth, 0.1, 0.18);
        }
    }

    impl SoundSink for WebAudioSink {
        fn play(&self, event: SoundEvent) {
            let Some(ctx) = &self.ctx else { return };

            // Browsers suspend the context until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match event {
                SoundEvent::Tap => self.play_tap(ctx),
                SoundEvent::Score(score) => self.play_score(ctx, score),
                SoundEvent::Death => self.play_death(ctx),
            }
        }
    }
}
