use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use thiserror::Error;

/// Scroll offset (px) at which the header switches to its compact style.
pub const COMPACT_THRESHOLD: f64 = 10.0;

/// Height (px) of the fixed header, subtracted from scroll targets so a
/// section's heading isn't hidden underneath it. Also offsets the spy's
/// probe point for the same reason.
pub const NAV_OFFSET: f64 = 70.0;

/// Duration (ms) of the smooth-scroll animation.
pub const SCROLL_DURATION_MS: f64 = 500.0;

/// The named page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// The `id` attribute of the section element this identifier addresses.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// Text shown for this section in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section anchor: {0}")]
pub struct UnknownSection(String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(SectionId::Home),
            "about" => Ok(SectionId::About),
            "experience" => Ok(SectionId::Experience),
            "contact" => Ok(SectionId::Contact),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// A section's vertical extent in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRegion {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

/// Whether the header should render in its compact (scrolled) style.
pub fn is_compact(scroll_y: f64) -> bool {
    scroll_y >= COMPACT_THRESHOLD
}

/// Map a probe point to the section whose region contains it.
///
/// Regions are supplied in registration (page) order and the first match
/// wins, so where regions overlap the topmost section takes the highlight.
pub fn resolve_active(probe_y: f64, regions: &[SectionRegion]) -> Option<SectionId> {
    regions
        .iter()
        .find(|r| probe_y >= r.top && probe_y < r.bottom)
        .map(|r| r.id)
}

/// Cubic ease-in-out over the normalized interval [0, 1].
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Eased scroll position at normalized time `t` of an animation from `from`
/// to `to`. Stays within the interval's bounds for any `t`.
pub fn eased_position(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * ease_in_out(t)
}

/// Reactive scroll-spy state: the compact-header flag and the currently
/// active section.
///
/// Subscribes to window scroll through `leptos-use`, which detaches the
/// listener when the owning component is disposed. Section regions are
/// re-measured from the live DOM on every scroll change; on the server the
/// effect never runs and the active section stays unset.
pub fn use_scroll_spy() -> (Memo<bool>, ReadSignal<Option<SectionId>>) {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let compact = Memo::new(move |_| is_compact(scroll_y()));
    let (active, set_active) = signal(None::<SectionId>);
    Effect::new(move |_| {
        let y = scroll_y();
        let regions = measure_regions(y);
        set_active(resolve_active(y + NAV_OFFSET, &regions));
    });
    (compact, active)
}

/// Measure each section's document-coordinate extent from its bounding rect.
/// Sections missing from the DOM are skipped.
fn measure_regions(scroll_y: f64) -> Vec<SectionRegion> {
    let doc = document();
    SectionId::ALL
        .iter()
        .filter_map(|&id| {
            let el = doc.get_element_by_id(id.anchor())?;
            let rect = el.get_bounding_client_rect();
            let top = rect.top() + scroll_y;
            Some(SectionRegion {
                id,
                top,
                bottom: top + rect.height(),
            })
        })
        .collect()
}

/// Smooth-scroll the viewport to a section, compensating for the fixed
/// header. The animation runs for a fixed duration with no cancellation
/// path; if the timing API is unavailable we jump straight to the target.
pub fn scroll_to_section(id: SectionId) {
    let win = window();
    let Some(el) = document().get_element_by_id(id.anchor()) else {
        log::warn!("missing section element: #{}", id.anchor());
        return;
    };
    let from = win.scroll_y().unwrap_or(0.0);
    let to = (el.get_bounding_client_rect().top() + from - NAV_OFFSET).max(0.0);
    match win.performance() {
        Some(perf) => animate_scroll(perf.now(), from, to),
        None => win.scroll_to_with_x_and_y(0.0, to),
    }
}

fn animate_scroll(started: f64, from: f64, to: f64) {
    request_animation_frame(move || {
        let win = window();
        let Some(perf) = win.performance() else {
            win.scroll_to_with_x_and_y(0.0, to);
            return;
        };
        let t = (perf.now() - started) / SCROLL_DURATION_MS;
        win.scroll_to_with_x_and_y(0.0, eased_position(from, to, t));
        if t < 1.0 {
            animate_scroll(started, from, to);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_regions() -> Vec<SectionRegion> {
        // Full-height hero followed by three content sections
        vec![
            region(SectionId::Home, 0.0, 900.0),
            region(SectionId::About, 900.0, 1700.0),
            region(SectionId::Experience, 1700.0, 2600.0),
            region(SectionId::Contact, 2600.0, 3400.0),
        ]
    }

    fn region(id: SectionId, top: f64, bottom: f64) -> SectionRegion {
        SectionRegion { id, top, bottom }
    }

    #[test]
    fn test_compact_threshold_boundary() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(COMPACT_THRESHOLD - 0.01));
        assert!(is_compact(COMPACT_THRESHOLD));
        assert!(is_compact(COMPACT_THRESHOLD + 500.0));
        // crossing back below restores the non-compact style
        assert!(!is_compact(COMPACT_THRESHOLD - 1.0));
    }

    #[test]
    fn test_probe_inside_experience_resolves_to_experience() {
        let regions = page_regions();
        assert_eq!(
            resolve_active(2000.0, &regions),
            Some(SectionId::Experience)
        );
        // exactly one section matches: region boundaries are half-open
        assert_eq!(resolve_active(1700.0, &regions), Some(SectionId::Experience));
        assert_eq!(resolve_active(1699.99, &regions), Some(SectionId::About));
    }

    #[test]
    fn test_probe_outside_all_regions_is_unset() {
        let regions = page_regions();
        assert_eq!(resolve_active(5000.0, &regions), None);
        assert_eq!(resolve_active(-10.0, &regions), None);
        assert_eq!(resolve_active(100.0, &[]), None);
    }

    #[test]
    fn test_overlapping_regions_tie_break_to_first_registered() {
        let regions = vec![
            region(SectionId::About, 100.0, 500.0),
            region(SectionId::Experience, 300.0, 700.0),
        ];
        assert_eq!(resolve_active(400.0, &regions), Some(SectionId::About));
        assert_eq!(resolve_active(600.0, &regions), Some(SectionId::Experience));
    }

    #[test]
    fn test_anchor_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_anchor_is_an_error() {
        let err = "projects".parse::<SectionId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section anchor: projects");
    }

    #[test]
    fn test_easing_endpoints_are_exact() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(eased_position(200.0, 1200.0, 0.0), 200.0);
        assert_eq!(eased_position(200.0, 1200.0, 1.0), 1200.0);
    }

    #[test]
    fn test_easing_is_clamped_outside_the_animation_window() {
        assert_eq!(eased_position(200.0, 1200.0, -0.5), 200.0);
        assert_eq!(eased_position(200.0, 1200.0, 1.5), 1200.0);
    }

    #[test]
    fn test_eased_position_stays_within_interval() {
        // holds scrolling down and scrolling back up
        for step in 0..=20 {
            let t = f64::from(step) / 20.0;
            let down = eased_position(0.0, 1000.0, t);
            assert!((0.0..=1000.0).contains(&down));
            let up = eased_position(1000.0, 0.0, t);
            assert!((0.0..=1000.0).contains(&up));
        }
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut prev = 0.0;
        for step in 1..=20 {
            let t = f64::from(step) / 20.0;
            let eased = ease_in_out(t);
            assert!(eased >= prev);
            prev = eased;
        }
    }
}
