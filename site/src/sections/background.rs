//! Fixed star field behind the whole page.

use leptos::prelude::*;
use portfolio_motion::{Particle, ParticleField};
use tracing::warn;

use crate::presets;
use crate::runtime::{MotionScope, use_motion_config};

/// Salt for the star field seed.
const STAR_SALT: u64 = 2;

#[component]
pub fn SpaceBackground() -> impl IntoView {
    let config = use_motion_config();
    let stars = match ParticleField::spawn(config.particles.star_count, config.seed_for(STAR_SALT))
    {
        Ok(field) => field.particles().to_vec(),
        Err(e) => {
            warn!(error = %e, "star field disabled");
            Vec::new()
        }
    };

    view! {
        <div class="space-background" aria-hidden="true">
            <div class="nebula nebula-primary"></div>
            <div class="nebula nebula-accent"></div>
            {stars.into_iter().map(|star| view! { <Star star=star /> }).collect_view()}
        </div>
    }
}

#[component]
fn Star(star: Particle) -> impl IntoView {
    let scope = MotionScope::new();
    let glow = scope.ambient_at_rest(presets::twinkle(star.delay), 1.0);
    let size = 1 + star.id % 3;
    let placement = star.placement();

    view! {
        <div
            class="star"
            style=move || {
                format!(
                    "{placement} width: {size}px; height: {size}px; opacity: {:.3};",
                    glow.get(),
                )
            }
        ></div>
    }
}
