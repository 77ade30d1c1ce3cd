use std::time::Duration;

use eframe::egui::{Vec2, vec2};

use crate::model::Slide;

pub const DEFAULT_ANIMATION: &str = "animate__fadeInUp";
pub const DEFAULT_SPEED: &str = "";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct AnimationCategory {
    pub name: &'static str,
    pub items: &'static [Animation],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    pub id: &'static str,
    pub label: &'static str,
    pub duration: Duration,
}

const fn anim(id: &'static str, label: &'static str) -> Animation {
    Animation { id, label }
}

pub const CATEGORIES: &[AnimationCategory] = &[
    AnimationCategory {
        name: "Attention Seekers",
        items: &[
            anim("animate__bounce", "Bounce"),
            anim("animate__flash", "Flash"),
            anim("animate__pulse", "Pulse"),
            anim("animate__rubberBand", "Rubber Band"),
            anim("animate__shakeX", "Shake X"),
            anim("animate__shakeY", "Shake Y"),
            anim("animate__headShake", "Head Shake"),
            anim("animate__swing", "Swing"),
            anim("animate__tada", "Tada"),
            anim("animate__wobble", "Wobble"),
            anim("animate__jello", "Jello"),
            anim("animate__heartBeat", "Heart Beat"),
        ],
    },
    AnimationCategory {
        name: "Fading Entrances",
        items: &[
            anim("animate__fadeIn", "Fade In"),
            anim("animate__fadeInDown", "Fade In Down"),
            anim("animate__fadeInDownBig", "Fade In Down Big"),
            anim("animate__fadeInLeft", "Fade In Left"),
            anim("animate__fadeInLeftBig", "Fade In Left Big"),
            anim("animate__fadeInRight", "Fade In Right"),
            anim("animate__fadeInRightBig", "Fade In Right Big"),
            anim("animate__fadeInUp", "Fade In Up"),
            anim("animate__fadeInUpBig", "Fade In Up Big"),
            anim("animate__fadeInTopLeft", "Fade In Top Left"),
            anim("animate__fadeInTopRight", "Fade In Top Right"),
            anim("animate__fadeInBottomLeft", "Fade In Bottom Left"),
            anim("animate__fadeInBottomRight", "Fade In Bottom Right"),
        ],
    },
    AnimationCategory {
        name: "Back Entrances",
        items: &[
            anim("animate__backInDown", "Back In Down"),
            anim("animate__backInLeft", "Back In Left"),
            anim("animate__backInRight", "Back In Right"),
            anim("animate__backInUp", "Back In Up"),
        ],
    },
    AnimationCategory {
        name: "Bouncing Entrances",
        items: &[
            anim("animate__bounceIn", "Bounce In"),
            anim("animate__bounceInDown", "Bounce In Down"),
            anim("animate__bounceInLeft", "Bounce In Left"),
            anim("animate__bounceInRight", "Bounce In Right"),
            anim("animate__bounceInUp", "Bounce In Up"),
        ],
    },
    AnimationCategory {
        name: "Flippers",
        items: &[
            anim("animate__flip", "Flip"),
            anim("animate__flipInX", "Flip In X"),
            anim("animate__flipInY", "Flip In Y"),
        ],
    },
    AnimationCategory {
        name: "Lightspeed",
        items: &[
            anim("animate__lightSpeedInRight", "Lightspeed In Right"),
            anim("animate__lightSpeedInLeft", "Lightspeed In Left"),
        ],
    },
    AnimationCategory {
        name: "Rotating Entrances",
        items: &[
            anim("animate__rotateIn", "Rotate In"),
            anim("animate__rotateInDownLeft", "Rotate In Down Left"),
            anim("animate__rotateInDownRight", "Rotate In Down Right"),
            anim("animate__rotateInUpLeft", "Rotate In Up Left"),
            anim("animate__rotateInUpRight", "Rotate In Up Right"),
        ],
    },
    AnimationCategory {
        name: "Specials & Custom",
        items: &[
            anim("animate__jackInTheBox", "Jack In The Box"),
            anim("animate__rollIn", "Roll In"),
            anim("anim-ken-burns", "Ken Burns (Pan/Zoom)"),
            anim("anim-tracking-in", "Tracking In"),
            anim("anim-focus-in", "Focus In"),
            anim("anim-slit-in", "Slit In"),
            anim("anim-swirl", "Swirl In"),
            anim("anim-puff", "Puff In"),
        ],
    },
    AnimationCategory {
        name: "Zooming Entrances",
        items: &[
            anim("animate__zoomIn", "Zoom In"),
            anim("animate__zoomInDown", "Zoom In Down"),
            anim("animate__zoomInLeft", "Zoom In Left"),
            anim("animate__zoomInRight", "Zoom In Right"),
            anim("animate__zoomInUp", "Zoom In Up"),
        ],
    },
    AnimationCategory {
        name: "Sliding Entrances",
        items: &[
            anim("animate__slideInDown", "Slide In Down"),
            anim("animate__slideInLeft", "Slide In Left"),
            anim("animate__slideInRight", "Slide In Right"),
            anim("animate__slideInUp", "Slide In Up"),
        ],
    },
];

pub const SPEEDS: &[Speed] = &[
    Speed {
        id: "animate__faster",
        label: "Turbo (500ms)",
        duration: Duration::from_millis(500),
    },
    Speed {
        id: "animate__fast",
        label: "Fast (800ms)",
        duration: Duration::from_millis(800),
    },
    Speed {
        id: "",
        label: "Normal (1s)",
        duration: Duration::from_secs(1),
    },
    Speed {
        id: "animate__slow",
        label: "Slow (2s)",
        duration: Duration::from_secs(2),
    },
    Speed {
        id: "animate__slower",
        label: "Slower (3s)",
        duration: Duration::from_secs(3),
    },
    Speed {
        id: "animate__slower-2x",
        label: "Cinematic (3s+)",
        duration: Duration::from_secs(4),
    },
];

/// Autoplay choices offered in presentation mode, in seconds.
pub const AUTO_PLAY_DURATIONS: &[(u64, &str)] =
    &[(3, "3s"), (5, "5s"), (10, "10s"), (15, "15s"), (30, "30s")];

pub fn all() -> impl Iterator<Item = &'static Animation> {
    CATEGORIES.iter().flat_map(|c| c.items.iter())
}

pub fn find(id: &str) -> Option<&'static Animation> {
    all().find(|a| a.id == id)
}

pub fn speed(id: &str) -> Option<&'static Speed> {
    SPEEDS.iter().find(|s| s.id == id)
}

/// The composed animation of one slide: its entrance effect and speed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClass {
    pub animation: String,
    pub speed: String,
}

impl Default for AnimationClass {
    fn default() -> Self {
        Self {
            animation: DEFAULT_ANIMATION.to_string(),
            speed: DEFAULT_SPEED.to_string(),
        }
    }
}

impl AnimationClass {
    pub fn for_slide(slide: &Slide) -> Self {
        Self {
            animation: slide
                .animation_type
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ANIMATION.to_string()),
            speed: slide.animation_speed.clone().unwrap_or_default(),
        }
    }

    /// Space-separated class list, e.g. `animate__animated animate__fadeIn animate__slow`.
    pub fn class_string(&self) -> String {
        let mut class = format!("animate__animated {}", self.animation);
        if !self.speed.is_empty() {
            class.push(' ');
            class.push_str(&self.speed);
        }
        class
    }

    pub fn duration(&self) -> Duration {
        speed(&self.speed).map_or(Duration::from_secs(1), |s| s.duration)
    }

    pub fn entrance(&self) -> Entrance {
        Entrance::from_id(&self.animation)
    }

    /// Animation frame `elapsed` after the slide appeared.
    pub fn frame_at(&self, elapsed: Duration) -> Frame {
        let progress = elapsed.as_secs_f32() / self.duration().as_secs_f32().max(0.001);
        self.entrance().sample(progress)
    }
}

/// How content moves onto the slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    Fade { from: Vec2 },
    Slide { from: Vec2 },
    Zoom { from_scale: f32, from: Vec2 },
    Bounce { from: Vec2 },
    Flip,
    Rotate { from: Vec2 },
    Attention,
    KenBurns,
}

/// Transform applied to slide content for one painted frame. `offset` is in
/// canvas units (1280x720 space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub offset: Vec2,
    pub scale: Vec2,
}

impl Frame {
    pub const REST: Frame = Frame {
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: Vec2 { x: 1.0, y: 1.0 },
    };
}

impl Entrance {
    pub fn from_id(id: &str) -> Self {
        let name = id
            .strip_prefix("animate__")
            .or_else(|| id.strip_prefix("anim-"))
            .unwrap_or(id);

        let big = name.ends_with("Big");
        let distance = if big { 1000.0 } else { 100.0 };
        let from = direction_of(name.trim_end_matches("Big")) * distance;

        if name.starts_with("fadeIn") || name == "focus-in" || name == "puff" {
            Self::Fade { from }
        } else if name.starts_with("slideIn") || name.starts_with("backIn") {
            Self::Slide {
                from: if from == Vec2::ZERO { vec2(0.0, 100.0) } else { from * 4.0 },
            }
        } else if name.starts_with("lightSpeedIn") {
            Self::Slide { from: from * 6.0 }
        } else if name.starts_with("zoomIn") || name == "jackInTheBox" || name == "tracking-in" {
            Self::Zoom {
                from_scale: 0.3,
                from: from * 3.0,
            }
        } else if name.starts_with("bounceIn") {
            Self::Bounce { from: from * 3.0 }
        } else if name.starts_with("flip") || name == "slit-in" {
            Self::Flip
        } else if name.starts_with("rotateIn") || name == "rollIn" || name == "swirl" {
            Self::Rotate {
                from: if from == Vec2::ZERO { vec2(-100.0, 0.0) } else { from },
            }
        } else if name == "ken-burns" {
            Self::KenBurns
        } else if find(id).is_some() {
            Self::Attention
        } else {
            Self::Fade { from: Vec2::ZERO }
        }
    }

    /// Frame at `progress` (0 = start, 1 = finished; values outside are clamped).
    pub fn sample(self, progress: f32) -> Frame {
        let t = progress.clamp(0.0, 1.0);
        if t >= 1.0 && !matches!(self, Self::KenBurns) {
            return Frame::REST;
        }
        let eased = ease_out_cubic(t);
        let remaining = 1.0 - eased;
        match self {
            Self::Fade { from } | Self::Rotate { from } => Frame {
                opacity: eased,
                offset: from * remaining,
                scale: Vec2::splat(1.0),
            },
            Self::Slide { from } => Frame {
                opacity: 1.0,
                offset: from * remaining,
                scale: Vec2::splat(1.0),
            },
            Self::Zoom { from_scale, from } => Frame {
                opacity: eased,
                offset: from * remaining,
                scale: Vec2::splat(from_scale + (1.0 - from_scale) * eased),
            },
            Self::Bounce { from } => {
                let bounce = ease_out_bounce(t);
                Frame {
                    opacity: (t * 3.0).min(1.0),
                    offset: from * (1.0 - bounce),
                    scale: Vec2::splat(0.3 + 0.7 * bounce),
                }
            }
            Self::Flip => Frame {
                opacity: eased,
                offset: Vec2::ZERO,
                scale: vec2(1.0, eased.max(0.01)),
            },
            Self::Attention => {
                let pulse = 1.0 + 0.05 * (t * std::f32::consts::PI).sin();
                Frame {
                    opacity: 1.0,
                    offset: Vec2::ZERO,
                    scale: Vec2::splat(pulse),
                }
            }
            Self::KenBurns => Frame {
                opacity: 1.0,
                offset: vec2(-20.0, -10.0) * t,
                scale: Vec2::splat(1.0 + 0.08 * t),
            },
        }
    }
}

/// Unit vector pointing to where the content starts, in screen coordinates.
fn direction_of(name: &str) -> Vec2 {
    let pairs: [(&str, Vec2); 8] = [
        ("TopLeft", vec2(-0.7, -0.7)),
        ("TopRight", vec2(0.7, -0.7)),
        ("BottomLeft", vec2(-0.7, 0.7)),
        ("BottomRight", vec2(0.7, 0.7)),
        ("DownLeft", vec2(-0.7, 0.7)),
        ("DownRight", vec2(0.7, 0.7)),
        ("UpLeft", vec2(-0.7, -0.7)),
        ("UpRight", vec2(0.7, -0.7)),
    ];
    if let Some((_, dir)) = pairs.iter().find(|(suffix, _)| name.ends_with(suffix)) {
        return *dir;
    }
    // "Down" entrances come from above, "Up" entrances from below.
    if name.ends_with("Down") {
        vec2(0.0, -1.0)
    } else if name.ends_with("Up") {
        vec2(0.0, 1.0)
    } else if name.ends_with("Left") {
        vec2(-1.0, 0.0)
    } else if name.ends_with("Right") {
        vec2(1.0, 0.0)
    } else {
        Vec2::ZERO
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_out_bounce(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(CATEGORIES.len(), 10);
        assert_eq!(all().count(), 61);
        assert!(find("anim-ken-burns").is_some());
        assert!(find("animate__nope").is_none());
    }

    #[test]
    fn test_class_string() {
        let slide = Slide::new("T", Layout::Title, &[])
            .with_animation("animate__fadeIn")
            .with_speed("animate__slow");
        let class = AnimationClass::for_slide(&slide);
        assert_eq!(
            class.class_string(),
            "animate__animated animate__fadeIn animate__slow"
        );
        assert_eq!(class.duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_default_class() {
        let slide = Slide::new("T", Layout::Title, &[]);
        let class = AnimationClass::for_slide(&slide);
        assert_eq!(class.class_string(), "animate__animated animate__fadeInUp");
        assert_eq!(class.duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_entrance_directions() {
        assert_eq!(
            Entrance::from_id("animate__fadeInUp"),
            Entrance::Fade {
                from: vec2(0.0, 100.0)
            }
        );
        assert_eq!(
            Entrance::from_id("animate__fadeInLeftBig"),
            Entrance::Fade {
                from: vec2(-1000.0, 0.0)
            }
        );
        assert_eq!(Entrance::from_id("animate__flipInX"), Entrance::Flip);
        assert_eq!(Entrance::from_id("animate__tada"), Entrance::Attention);
        assert_eq!(
            Entrance::from_id("unknown"),
            Entrance::Fade { from: Vec2::ZERO }
        );
    }

    #[test]
    fn test_every_entrance_settles_at_rest() {
        for animation in all() {
            let entrance = Entrance::from_id(animation.id);
            if entrance == Entrance::KenBurns {
                continue;
            }
            assert_eq!(entrance.sample(1.0), Frame::REST, "{}", animation.id);
            assert_eq!(entrance.sample(5.0), Frame::REST, "{}", animation.id);
        }
    }

    #[test]
    fn test_fade_starts_transparent() {
        let frame = Entrance::from_id("animate__fadeIn").sample(0.0);
        assert_eq!(frame.opacity, 0.0);
    }
}
