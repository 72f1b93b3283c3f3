//! Confetti layer played on each successful signup.

use leptos::prelude::*;
use waitlist_core::{burst, ConfettiConfig, Particle};

use crate::state::WaitlistHandle;

/// Inline style driving the `confetti-fly` keyframes for one particle.
pub fn particle_style(particle: &Particle, duration_ms: u32) -> String {
    format!(
        "--dx: {:.2}vw; --dy: {:.2}vh; --rot: {:.0}deg; --delay: {}ms; --duration: {}ms; \
         width: {:.1}px; height: {:.1}px; background: {};",
        particle.dx,
        particle.dy,
        particle.rotation,
        particle.delay_ms,
        duration_ms,
        particle.size,
        particle.size * 0.6,
        particle.color,
    )
}

/// Style placing the burst origin on the viewport.
pub fn origin_style(config: &ConfettiConfig) -> String {
    format!(
        "left: {:.1}%; top: {:.1}%;",
        config.origin_x * 100.0,
        config.origin_y * 100.0
    )
}

#[component]
pub fn ConfettiLayer() -> impl IntoView {
    let handle = expect_context::<WaitlistHandle>();
    let config = ConfettiConfig::default();

    move || {
        handle.celebration.get().map(|seed| {
            let particles = burst(&config, seed)
                .iter()
                .map(|p| view! { <span class="confetti-piece" style=particle_style(p, config.duration_ms)></span> })
                .collect_view();

            view! {
                <div class="confetti-layer" aria-hidden="true">
                    <div class="confetti-origin" style=origin_style(&config)>
                        {particles}
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_style() {
        let particle = Particle {
            dx: 10.0,
            dy: -20.5,
            rotation: 90.0,
            size: 10.0,
            delay_ms: 40,
            color: "#26ccff",
        };
        let style = particle_style(&particle, 3000);

        assert!(style.contains("--dx: 10.00vw;"));
        assert!(style.contains("--dy: -20.50vh;"));
        assert!(style.contains("--rot: 90deg;"));
        assert!(style.contains("--delay: 40ms;"));
        assert!(style.contains("--duration: 3000ms;"));
        assert!(style.contains("width: 10.0px; height: 6.0px;"));
        assert!(style.ends_with("background: #26ccff;"));
    }

    #[test]
    fn test_origin_style() {
        let style = origin_style(&ConfettiConfig::default());
        assert_eq!(style, "left: 50.0%; top: 70.0%;");
    }
}
