//! Scroll-driven 3D choreography for the landing page.
//!
//! Everything in this module is plain arithmetic over [`ScrollState`], so
//! the whole choreography can be exercised without a DOM. The display side
//! (`app::anchors`) only consumes the [`TransformDescriptor`]s produced
//! here.

/// Named on-screen slot whose transform is driven by scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    BackgroundLabel,
    Portrait,
    Headline,
    Indicator,
    SecondarySection,
}

impl Anchor {
    /// Stable ordering, matching the motion table below.
    pub const ALL: [Anchor; 5] = [
        Anchor::BackgroundLabel,
        Anchor::Portrait,
        Anchor::Headline,
        Anchor::Indicator,
        Anchor::SecondarySection,
    ];

    pub fn index(self) -> usize {
        match self {
            Anchor::BackgroundLabel => 0,
            Anchor::Portrait => 1,
            Anchor::Headline => 2,
            Anchor::Indicator => 3,
            Anchor::SecondarySection => 4,
        }
    }
}

/// Snapshot of the window's vertical scroll position, taken once per
/// scroll event and discarded after the transforms are applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset_y: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(offset_y: f64, viewport_height: f64) -> Self {
        Self {
            offset_y,
            viewport_height,
        }
    }

    /// How far through the first viewport height the user has scrolled,
    /// clamped to `[0, 1]`. A zero-height viewport reads as no progress
    /// rather than dividing by zero.
    pub fn progress(&self) -> f64 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        (self.offset_y / self.viewport_height).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn css_fn(self) -> &'static str {
        match self {
            Axis::X => "rotateX",
            Axis::Y => "rotateY",
            Axis::Z => "rotateZ",
        }
    }
}

/// Vertical translation of an anchor at a given scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Translation {
    Px(f64),
    Vh(f64),
}

/// The transform computed for one anchor at one scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformDescriptor {
    /// Anchors laid out with `left: 50%` keep their `-50%` X centering
    /// while moving.
    pub center_x: bool,
    pub translate_y: Translation,
    /// Fixed scene depth (`translateZ`), not scroll-dependent.
    pub depth_px: f64,
    /// Rotations in application order.
    pub rotations: Vec<(Axis, f64)>,
}

impl TransformDescriptor {
    /// CSS `transform` value with terms in the order they are applied.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        if self.center_x {
            out.push_str("translateX(-50%) ");
        }
        match self.translate_y {
            Translation::Px(px) => out.push_str(&format!("translateY({px}px)")),
            Translation::Vh(vh) => out.push_str(&format!("translateY({vh}vh)")),
        }
        out.push_str(&format!(" translateZ({}px)", self.depth_px));
        for (axis, deg) in &self.rotations {
            out.push_str(&format!(" {}({deg}deg)", axis.css_fn()));
        }
        out
    }
}

/// Vertical motion rule for one anchor.
#[derive(Debug, Clone, Copy)]
enum Glide {
    /// Translate by `factor * offset_y` pixels.
    Tracks { factor: f64 },
    /// Slide from `from_vh` toward `rest_vh`, `rate` vh per scrolled pixel,
    /// clamped so the section never overshoots its resting offset.
    Slides { from_vh: f64, rate: f64, rest_vh: f64 },
}

impl Glide {
    fn evaluate(self, offset_y: f64) -> Translation {
        match self {
            Glide::Tracks { factor } => {
                let px = factor * offset_y;
                // normalize -0 so rendered CSS and equality stay clean
                Translation::Px(if px == 0.0 { 0.0 } else { px })
            }
            Glide::Slides {
                from_vh,
                rate,
                rest_vh,
            } => Translation::Vh((from_vh - offset_y * rate).clamp(rest_vh, from_vh)),
        }
    }
}

/// Rotation rule: `base_deg + sweep_deg * progress`. Progress is already
/// clamped to `[0, 1]`, so the swept angle never leaves
/// `[base_deg, base_deg + sweep_deg]`.
#[derive(Debug, Clone, Copy)]
struct Spin {
    axis: Axis,
    base_deg: f64,
    sweep_deg: f64,
}

struct Motion {
    glide: Glide,
    depth_px: f64,
    center_x: bool,
    spins: &'static [Spin],
}

impl Motion {
    fn evaluate(&self, state: &ScrollState) -> TransformDescriptor {
        let progress = state.progress();
        TransformDescriptor {
            center_x: self.center_x,
            translate_y: self.glide.evaluate(state.offset_y),
            depth_px: self.depth_px,
            rotations: self
                .spins
                .iter()
                .map(|spin| (spin.axis, spin.base_deg + spin.sweep_deg * progress))
                .collect(),
        }
    }
}

/// The fixed choreography: one motion rule per anchor, in [`Anchor::ALL`]
/// order. Deliberate static staging, not a configurable physics system.
const MOTIONS: [(Anchor, Motion); 5] = [
    (
        Anchor::BackgroundLabel,
        Motion {
            glide: Glide::Tracks { factor: -0.8 },
            depth_px: 20.0,
            center_x: false,
            spins: &[Spin {
                axis: Axis::X,
                base_deg: 0.0,
                sweep_deg: 10.0,
            }],
        },
    ),
    (
        Anchor::Portrait,
        Motion {
            glide: Glide::Tracks { factor: 0.3 },
            depth_px: 100.0,
            center_x: false,
            // base -5° Y tilt, deepening as the user scrolls
            spins: &[
                Spin {
                    axis: Axis::Y,
                    base_deg: -5.0,
                    sweep_deg: -10.0,
                },
                Spin {
                    axis: Axis::X,
                    base_deg: 0.0,
                    sweep_deg: 5.0,
                },
            ],
        },
    ),
    (
        Anchor::Headline,
        Motion {
            glide: Glide::Tracks { factor: -0.2 },
            depth_px: 60.0,
            center_x: false,
            spins: &[Spin {
                axis: Axis::X,
                base_deg: 0.0,
                sweep_deg: 8.0,
            }],
        },
    ),
    (
        Anchor::Indicator,
        Motion {
            glide: Glide::Tracks { factor: -0.1 },
            depth_px: 80.0,
            center_x: true,
            spins: &[Spin {
                axis: Axis::Z,
                base_deg: 0.0,
                sweep_deg: 15.0,
            }],
        },
    ),
    (
        Anchor::SecondarySection,
        Motion {
            glide: Glide::Slides {
                from_vh: 100.0,
                rate: 0.15,
                rest_vh: -20.0,
            },
            depth_px: 50.0,
            center_x: false,
            // starts tipped back 15°, flattens out as it arrives
            spins: &[Spin {
                axis: Axis::X,
                base_deg: 15.0,
                sweep_deg: -15.0,
            }],
        },
    ),
];

/// Evaluate the whole choreography for one scroll state. Pure: identical
/// states always yield identical descriptors, in [`Anchor::ALL`] order.
pub fn compute_transforms(state: &ScrollState) -> Vec<(Anchor, TransformDescriptor)> {
    MOTIONS
        .iter()
        .map(|(anchor, motion)| (*anchor, motion.evaluate(state)))
        .collect()
}

/// Descriptor for an anchor before any scrolling has happened.
pub fn rest_transform(anchor: Anchor) -> TransformDescriptor {
    MOTIONS[anchor.index()].1.evaluate(&ScrollState::default())
}

/// Inline `transform` value for an anchor's server-rendered rest state.
pub fn rest_css(anchor: Anchor) -> String {
    rest_transform(anchor).to_css()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor_for(anchor: Anchor, state: &ScrollState) -> TransformDescriptor {
        compute_transforms(state)
            .into_iter()
            .find(|(a, _)| *a == anchor)
            .map(|(_, d)| d)
            .expect("every anchor should have a transform")
    }

    #[test]
    fn progress_stays_in_unit_range() {
        for offset in [0.0, 1.0, 100.0, 799.0, 800.0, 1600.0, 1e9] {
            let p = ScrollState::new(offset, 800.0).progress();
            assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
        }
    }

    #[test]
    fn progress_is_monotonic_in_offset() {
        let mut last = 0.0;
        for step in 0..60 {
            let p = ScrollState::new(step as f64 * 40.0, 800.0).progress();
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn zero_viewport_height_reads_as_no_progress() {
        let state = ScrollState::new(500.0, 0.0);
        assert_eq!(state.progress(), 0.0);
        // and nothing downstream produces NaN or infinity
        for (_, descriptor) in compute_transforms(&state) {
            for (_, deg) in &descriptor.rotations {
                assert!(deg.is_finite());
            }
        }
    }

    #[test]
    fn compute_transforms_is_pure() {
        let state = ScrollState::new(371.0, 912.0);
        assert_eq!(compute_transforms(&state), compute_transforms(&state));
    }

    #[test]
    fn motion_table_covers_every_anchor_in_order() {
        let transforms = compute_transforms(&ScrollState::default());
        assert_eq!(transforms.len(), Anchor::ALL.len());
        for (anchor, (computed, _)) in Anchor::ALL.iter().zip(&transforms) {
            assert_eq!(anchor, computed);
        }
    }

    #[test]
    fn anchors_rest_when_unscrolled() {
        let rest = ScrollState::new(0.0, 800.0);
        let label = descriptor_for(Anchor::BackgroundLabel, &rest);
        assert_eq!(label.translate_y, Translation::Px(0.0));
        assert_eq!(label.rotations, vec![(Axis::X, 0.0)]);

        let headline = descriptor_for(Anchor::Headline, &rest);
        assert_eq!(headline.translate_y, Translation::Px(0.0));
        assert_eq!(headline.rotations, vec![(Axis::X, 0.0)]);

        let indicator = descriptor_for(Anchor::Indicator, &rest);
        assert_eq!(indicator.translate_y, Translation::Px(0.0));
        assert_eq!(indicator.rotations, vec![(Axis::Z, 0.0)]);

        // the portrait keeps its base tilt even at rest
        let portrait = descriptor_for(Anchor::Portrait, &rest);
        assert_eq!(portrait.translate_y, Translation::Px(0.0));
        assert_eq!(portrait.rotations, vec![(Axis::Y, -5.0), (Axis::X, 0.0)]);

        // the work section waits a full viewport below the fold
        let section = descriptor_for(Anchor::SecondarySection, &rest);
        assert_eq!(section.translate_y, Translation::Vh(100.0));
        assert_eq!(section.rotations, vec![(Axis::X, 15.0)]);
    }

    #[test]
    fn full_viewport_scroll_reaches_terminal_rotations() {
        let state = ScrollState::new(800.0, 800.0);
        assert_eq!(
            descriptor_for(Anchor::BackgroundLabel, &state).rotations,
            vec![(Axis::X, 10.0)]
        );
        assert_eq!(
            descriptor_for(Anchor::Indicator, &state).rotations,
            vec![(Axis::Z, 15.0)]
        );
        assert_eq!(
            descriptor_for(Anchor::SecondarySection, &state).rotations,
            vec![(Axis::X, 0.0)]
        );
        assert_eq!(
            descriptor_for(Anchor::Portrait, &state).rotations,
            vec![(Axis::Y, -15.0), (Axis::X, 5.0)]
        );
    }

    #[test]
    fn rotations_clamp_beyond_one_viewport() {
        // translation keeps tracking the scroll, rotation does not run away
        let state = ScrollState::new(1600.0, 800.0);
        let label = descriptor_for(Anchor::BackgroundLabel, &state);
        assert_eq!(label.translate_y, Translation::Px(-1280.0));
        assert_eq!(label.rotations, vec![(Axis::X, 10.0)]);
        assert_eq!(
            descriptor_for(Anchor::Indicator, &state).rotations,
            vec![(Axis::Z, 15.0)]
        );
        assert_eq!(
            descriptor_for(Anchor::SecondarySection, &state).rotations,
            vec![(Axis::X, 0.0)]
        );
    }

    #[test]
    fn hero_layers_drift_in_opposing_directions() {
        let state = ScrollState::new(800.0, 800.0);
        assert_eq!(
            descriptor_for(Anchor::BackgroundLabel, &state).translate_y,
            Translation::Px(-640.0)
        );
        assert_eq!(
            descriptor_for(Anchor::Portrait, &state).translate_y,
            Translation::Px(240.0)
        );
        assert_eq!(
            descriptor_for(Anchor::Headline, &state).translate_y,
            Translation::Px(-160.0)
        );
        assert_eq!(
            descriptor_for(Anchor::Indicator, &state).translate_y,
            Translation::Px(-80.0)
        );
    }

    #[test]
    fn secondary_section_offset_clamps_to_resting_range() {
        for offset in [0.0, 200.0, 790.0, 800.0, 5000.0, 1e7] {
            let descriptor =
                descriptor_for(Anchor::SecondarySection, &ScrollState::new(offset, 800.0));
            let Translation::Vh(vh) = descriptor.translate_y else {
                panic!("secondary section translates in vh");
            };
            assert!((-20.0..=100.0).contains(&vh), "offset {offset} gave {vh}vh");
        }
        // fully scrolled past, it sits at its resting offset
        let descriptor =
            descriptor_for(Anchor::SecondarySection, &ScrollState::new(5000.0, 800.0));
        assert_eq!(descriptor.translate_y, Translation::Vh(-20.0));
    }

    #[test]
    fn css_terms_follow_apply_order() {
        let state = ScrollState::new(800.0, 800.0);
        let css = descriptor_for(Anchor::Indicator, &state).to_css();
        assert_eq!(
            css,
            "translateX(-50%) translateY(-80px) translateZ(80px) rotateZ(15deg)"
        );

        let css = descriptor_for(Anchor::Portrait, &state).to_css();
        assert_eq!(
            css,
            "translateY(240px) translateZ(100px) rotateY(-15deg) rotateX(5deg)"
        );
    }

    #[test]
    fn rest_css_matches_unscrolled_compute() {
        for anchor in Anchor::ALL {
            let from_engine = descriptor_for(anchor, &ScrollState::new(0.0, 800.0));
            assert_eq!(rest_transform(anchor), from_engine);
            assert_eq!(rest_css(anchor), from_engine.to_css());
        }
    }
}
