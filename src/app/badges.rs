use leptos::prelude::*;

pub const MAX_RATING: u8 = 5;

/// One floating testimonial: a single emphasized word, a star rating, and
/// who said it. Positioned as viewport percentages; revealed once, after
/// `reveal_delay_secs`, and never hidden again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeRecord {
    pub word: &'static str,
    pub rating: u8,
    pub attribution: &'static str,
    pub top_pct: f64,
    pub left_pct: f64,
    pub reveal_delay_secs: f64,
}

const fn badge(
    word: &'static str,
    rating: u8,
    attribution: &'static str,
    top_pct: f64,
    left_pct: f64,
    reveal_delay_secs: f64,
) -> BadgeRecord {
    BadgeRecord {
        word,
        rating,
        attribution,
        top_pct,
        left_pct,
        reveal_delay_secs,
    }
}

/// The full registry, fixed for the life of the page. Render order (and
/// identity) is array order.
pub static TESTIMONIAL_BADGES: [BadgeRecord; 10] = [
    badge("VISIONARY", 5, "— Forbes", 10.0, 25.0, 1.2),
    badge("MASTERFUL", 5, "— Design Week", 15.0, 70.0, 1.8),
    badge("BRILLIANT", 5, "— Creative Review", 25.0, 20.0, 2.4),
    badge("INNOVATIVE", 5, "— Fast Company", 30.0, 87.0, 3.0),
    badge("ICONIC", 5, "— Dezeen", 50.0, 20.0, 2.1),
    badge("PROFOUND", 5, "— AIGA", 47.0, 84.0, 3.3),
    badge("STUNNING", 5, "— Vogue", 12.0, 10.0, 2.7),
    badge("REVOLUTIONARY", 5, "— Wired", 40.0, 2.0, 2.0),
    badge("CAPTIVATING", 5, "— Elle", 55.0, 68.0, 3.9),
    badge("CREATIVE", 5, "— Inkwellmedia", 35.0, 73.0, 3.9),
];

/// Number of star glyphs to render. Out-of-range ratings clamp instead of
/// failing.
fn star_count(rating: u8) -> usize {
    rating.min(MAX_RATING) as usize
}

#[component]
pub fn TestimonialBadge(badge: &'static BadgeRecord) -> impl IntoView {
    let stars = (0..star_count(badge.rating))
        .map(|_| {
            view! {
                <span class="text-[10px] text-white/70 mr-0.5" style="transform: translateZ(5px)">
                    "★"
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            class="absolute opacity-0 animate-fade-in-delayed cursor-default"
            style=format!(
                "top: {}%; left: {}%; animation-delay: {}s; animation-fill-mode: forwards; transform: translateZ(80px) rotateX(5deg); transform-style: preserve-3d",
                badge.top_pct,
                badge.left_pct,
                badge.reveal_delay_secs,
            )
        >
            <div class="text-left" style="transform-style: preserve-3d">
                <div class="flex mb-1" style="transform: translateZ(10px)">{stars}</div>
                <div class="relative inline-block text-[1.6rem] sm:text-2xl font-display uppercase tracking-wide leading-none">
                    <span
                        class="relative z-10 text-white/10 animate-shine"
                        style="transform: translateZ(15px)"
                    >
                        {badge.word}
                    </span>
                </div>
                <div
                    class="mt-1 text-sm text-white/20 font-light tracking-wide"
                    style="transform: translateZ(8px)"
                >
                    {badge.attribution}
                </div>
            </div>
        </div>
    }
}

/// Fixed overlay projecting every registry entry. Projected once at
/// composition time; badges never take pointer interaction.
#[component]
pub fn BadgeField() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-20 pointer-events-none" style="transform-style: preserve-3d">
            {TESTIMONIAL_BADGES
                .iter()
                .map(|badge| view! { <TestimonialBadge badge=badge /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rating_renders_zero_stars() {
        assert_eq!(star_count(0), 0);
    }

    #[test]
    fn full_rating_renders_five_stars() {
        assert_eq!(star_count(5), 5);
    }

    #[test]
    fn out_of_range_rating_clamps() {
        assert_eq!(star_count(9), 5);
        assert_eq!(star_count(u8::MAX), 5);
    }

    #[test]
    fn registry_entries_are_renderable() {
        for badge in &TESTIMONIAL_BADGES {
            assert!(badge.rating <= MAX_RATING);
            assert!(badge.reveal_delay_secs >= 0.0);
            assert!((0.0..=100.0).contains(&badge.top_pct));
            assert!((0.0..=100.0).contains(&badge.left_pct));
            assert!(!badge.word.is_empty());
            assert!(!badge.attribution.is_empty());
        }
    }
}
