//! Decorative floating particles behind the card.

use dioxus::prelude::*;

/// Number of floating particles.
const PARTICLE_COUNT: usize = 15;

/// Horizontal position in vw. Spread deterministically so render stays pure.
fn particle_left_vw(index: usize) -> usize {
    (index * 41 + 13) % 100
}

/// Rise duration in ms, between 7 and 12 seconds.
fn particle_duration_ms(index: usize) -> usize {
    7000 + (index * 37 % 50) * 100
}

/// Stagger so the field fills gradually.
fn particle_delay_ms(index: usize) -> usize {
    index * 1200
}

fn particle_size_px(index: usize) -> usize {
    if index % 2 == 0 { 22 } else { 14 }
}

#[component]
pub fn ParticleField() -> Element {
    rsx! {
        div { class: "particle-field",
            for i in 0..PARTICLE_COUNT {
                span {
                    key: "{i}",
                    class: if i % 3 == 0 { "particle particle-bright" } else { "particle particle-soft" },
                    style: "left: {particle_left_vw(i)}vw; font-size: {particle_size_px(i)}px; animation-duration: {particle_duration_ms(i)}ms; animation-delay: {particle_delay_ms(i)}ms;",
                    if i % 2 == 0 { "💖" } else { "✨" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_stay_on_screen() {
        for i in 0..PARTICLE_COUNT {
            assert!(particle_left_vw(i) < 100);
        }
    }

    #[test]
    fn test_durations_in_range() {
        for i in 0..PARTICLE_COUNT {
            let d = particle_duration_ms(i);
            assert!((7000..12000).contains(&d), "duration {d} out of range");
        }
    }

    #[test]
    fn test_delays_stagger() {
        assert_eq!(particle_delay_ms(0), 0);
        assert!(particle_delay_ms(1) < particle_delay_ms(14));
    }
}
