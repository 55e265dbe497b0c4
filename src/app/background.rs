use leptos::prelude::*;

const PARTICLE_COUNT: usize = 50;

/// splitmix64 finalizer; gives each particle stable pseudo-random geometry
/// without an RNG in the render path. Hydration sees the same markup the
/// server produced.
fn scatter(seed: u64) -> u64 {
    let mut x = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Particle {
    top: u64,
    left: u64,
    size: u64,
    duration: u64,
}

impl Particle {
    fn at(index: usize) -> Self {
        let bits = scatter(index as u64);
        Self {
            top: bits % 100,
            left: (bits >> 8) % 100,
            size: (bits >> 16) % 4 + 1,
            duration: (bits >> 24) % 10 + 5,
        }
    }

    fn style(self) -> String {
        format!(
            "top: {}%; left: {}%; width: {}px; height: {}px; animation: float {}s linear infinite;",
            self.top, self.left, self.size, self.size, self.duration
        )
    }
}

/// Purely decorative. The drift itself is the `float` CSS keyframe.
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10">
            <div class="absolute inset-0 bg-gradient-to-br from-purple-50 to-indigo-100 dark:from-gray-900 dark:to-indigo-950"></div>
            <div class="absolute inset-0 opacity-50 dark:opacity-30">
                {(0..PARTICLE_COUNT)
                    .map(|index| {
                        view! {
                            <div
                                class="absolute rounded-full bg-white dark:bg-gray-800"
                                style=Particle::at(index).style()
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_is_deterministic() {
        for index in 0..PARTICLE_COUNT {
            assert_eq!(Particle::at(index), Particle::at(index));
        }
    }

    #[test]
    fn test_geometry_stays_in_bounds() {
        for index in 0..PARTICLE_COUNT {
            let p = Particle::at(index);
            assert!(p.top < 100);
            assert!(p.left < 100);
            assert!((1..=4).contains(&p.size));
            assert!((5..=14).contains(&p.duration));
        }
    }

    #[test]
    fn test_particles_are_spread_out() {
        // Not a statistical claim, just that the field isn't one stacked dot.
        let positions: std::collections::HashSet<_> = (0..PARTICLE_COUNT)
            .map(|i| {
                let p = Particle::at(i);
                (p.top, p.left)
            })
            .collect();
        assert!(positions.len() > PARTICLE_COUNT / 2);
    }
}
