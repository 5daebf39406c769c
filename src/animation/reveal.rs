//! Scroll-triggered reveal engine.
//!
//! The engine owns no DOM. Targets are registered under an opaque node key
//! `K`, visibility notifications are fed in with an explicit clock, and the
//! engine answers with [`RevealEffect`]s for the caller to apply. Every delay
//! lives on a [`Timeline`] that the caller advances once per animation frame
//! through [`RevealEngine::tick`].

use log::{debug, info};

use super::counter::{CounterAnimation, CounterPhase};
use super::easing::{Easing, Transition};
use super::geometry::RootMargin;
use super::timeline::Timeline;

/// Index of a registered target.
pub type TargetId = usize;

/// How delays are spread once a target triggers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StaggerScope {
    /// The target shows at once and its children cascade by ordinal index.
    Children,
    /// Each triggered target cascades by its position in the notification batch.
    Batch,
}

/// Counter kick-off for the one section holding the stats.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsTrigger {
    pub section_id: String,
    pub delay_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub stagger_ms: f64,
    pub scope: StaggerScope,
    pub target_offset_px: f64,
    pub target_transition: Transition,
    pub child_offset_px: f64,
    pub child_transition: Transition,
    pub stats: Option<StatsTrigger>,
}

impl RevealConfig {
    /// Section pass: whole sections fade in and cascade their cards.
    pub fn sections(stats_section_id: &str) -> Self {
        Self {
            threshold: 0.15,
            root_margin: RootMargin::bottom(-100.0),
            stagger_ms: 150.0,
            scope: StaggerScope::Children,
            target_offset_px: 60.0,
            target_transition: Transition::new(1200, Easing::Standard),
            child_offset_px: 40.0,
            child_transition: Transition::new(800, Easing::Standard),
            stats: Some(StatsTrigger {
                section_id: stats_section_id.to_string(),
                delay_ms: 500.0,
            }),
        }
    }

    /// Card pass: individual cards observed on their own.
    pub fn cards() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::bottom(-50.0),
            stagger_ms: 100.0,
            scope: StaggerScope::Batch,
            target_offset_px: 30.0,
            target_transition: Transition::new(600, Easing::Ease),
            child_offset_px: 0.0,
            child_transition: Transition::new(600, Easing::Ease),
            stats: None,
        }
    }

    fn triggers(&self, entry: &Intersection) -> bool {
        entry.is_intersecting && entry.ratio >= self.threshold
    }
}

/// What the host registers for one observed element.
#[derive(Clone, Debug)]
pub struct TargetSpec<K> {
    pub node: K,
    pub id: Option<String>,
    /// Eligible children in document order.
    pub children: Vec<K>,
    /// Counter nodes with their parsed targets, in document order.
    pub counters: Vec<(K, f64)>,
}

impl<K> TargetSpec<K> {
    pub fn new(node: K) -> Self {
        Self {
            node,
            id: None,
            children: Vec::new(),
            counters: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_children(mut self, children: Vec<K>) -> Self {
        self.children = children;
        self
    }

    pub fn with_counters(mut self, counters: Vec<(K, f64)>) -> Self {
        self.counters = counters;
        self
    }
}

/// One visibility notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub target: TargetId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RevealEffect<K> {
    /// Put the node in its hidden state and install its transition.
    Prepare {
        node: K,
        offset_px: f64,
        transition: Transition,
    },
    /// Opacity 1, no translation.
    Reveal(K),
    /// Stop observing the node.
    Release(K),
    CounterText { node: K, text: String },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Pending,
    Revealed,
}

struct Watched<K> {
    spec: TargetSpec<K>,
    phase: Phase,
}

enum Scheduled<K> {
    Reveal(K),
    StartCounters(TargetId),
}

pub struct RevealEngine<K> {
    config: RevealConfig,
    targets: Vec<Watched<K>>,
    timeline: Timeline<Scheduled<K>>,
    counters: Vec<CounterAnimation<K>>,
}

impl<K: Clone> RevealEngine<K> {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
            timeline: Timeline::new(),
            counters: Vec::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn register(&mut self, spec: TargetSpec<K>) -> TargetId {
        self.targets.push(Watched {
            spec,
            phase: Phase::Pending,
        });
        self.targets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_revealed(&self, target: TargetId) -> bool {
        self.targets
            .get(target)
            .map_or(false, |w| w.phase == Phase::Revealed)
    }

    /// Targets still waiting for their trigger.
    pub fn pending(&self) -> impl Iterator<Item = (TargetId, &K)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter(|(_, w)| w.phase == Phase::Pending)
            .map(|(id, w)| (id, &w.spec.node))
    }

    /// Nothing scheduled and no counter mid-flight.
    pub fn is_idle(&self) -> bool {
        self.timeline.is_empty() && self.counters.is_empty()
    }

    /// Initial hidden states and transitions for everything registered.
    pub fn setup_effects(&self) -> Vec<RevealEffect<K>> {
        let mut effects = Vec::new();
        for watched in &self.targets {
            effects.push(RevealEffect::Prepare {
                node: watched.spec.node.clone(),
                offset_px: self.config.target_offset_px,
                transition: self.config.target_transition,
            });
            for child in &watched.spec.children {
                effects.push(RevealEffect::Prepare {
                    node: child.clone(),
                    offset_px: self.config.child_offset_px,
                    transition: self.config.child_transition,
                });
            }
        }
        effects
    }

    /// Handles a batch of visibility notifications observed at `now`.
    ///
    /// Zero-delay work is flushed before returning, so the first child of a
    /// triggered section is already in the result.
    pub fn notify(&mut self, now: f64, entries: &[Intersection]) -> Vec<RevealEffect<K>> {
        let mut effects = Vec::new();
        let mut batch_index = 0usize;

        for entry in entries {
            if !self.config.triggers(entry) {
                continue;
            }
            let Some(watched) = self.targets.get_mut(entry.target) else {
                continue;
            };
            if watched.phase == Phase::Revealed {
                continue;
            }
            watched.phase = Phase::Revealed;

            match self.config.scope {
                StaggerScope::Children => {
                    for (k, child) in watched.spec.children.iter().enumerate() {
                        let due = now + k as f64 * self.config.stagger_ms;
                        self.timeline.schedule(due, Scheduled::Reveal(child.clone()));
                    }
                    effects.push(RevealEffect::Reveal(watched.spec.node.clone()));
                }
                StaggerScope::Batch => {
                    let due = now + batch_index as f64 * self.config.stagger_ms;
                    self.timeline
                        .schedule(due, Scheduled::Reveal(watched.spec.node.clone()));
                }
            }
            batch_index += 1;

            if let Some(stats) = &self.config.stats {
                if watched.spec.id.as_deref() == Some(stats.section_id.as_str()) {
                    self.timeline
                        .schedule(now + stats.delay_ms, Scheduled::StartCounters(entry.target));
                }
            }

            effects.push(RevealEffect::Release(watched.spec.node.clone()));
            debug!(
                "reveal triggered for {} at ratio {:.2}",
                watched.spec.id.as_deref().unwrap_or("<unnamed>"),
                entry.ratio
            );
        }

        effects.extend(self.tick(now));
        effects
    }

    /// Advances timers and running counters to `now`.
    pub fn tick(&mut self, now: f64) -> Vec<RevealEffect<K>> {
        let mut effects = Vec::new();

        while let Some((due, action)) = self.timeline.pop_due(now) {
            match action {
                Scheduled::Reveal(node) => effects.push(RevealEffect::Reveal(node)),
                Scheduled::StartCounters(target) => self.start_counters(target, due),
            }
        }

        for counter in self.counters.iter_mut() {
            if let Some(text) = counter.tick(now) {
                effects.push(RevealEffect::CounterText {
                    node: counter.node.clone(),
                    text,
                });
            }
        }
        self.counters
            .retain(|counter| counter.phase() != CounterPhase::Complete);

        effects
    }

    fn start_counters(&mut self, target: TargetId, invoked_at: f64) {
        let Some(watched) = self.targets.get(target) else {
            return;
        };
        info!(
            "starting {} counters in {}",
            watched.spec.counters.len(),
            watched.spec.id.as_deref().unwrap_or("<unnamed>")
        );
        for (index, (node, value)) in watched.spec.counters.iter().enumerate() {
            self.counters
                .push(CounterAnimation::new(node.clone(), *value, index, invoked_at));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(target: TargetId, ratio: f64) -> Intersection {
        Intersection {
            target,
            is_intersecting: true,
            ratio,
        }
    }

    fn section(name: &'static str, children: &[&'static str]) -> TargetSpec<&'static str> {
        TargetSpec::new(name)
            .with_id(name)
            .with_children(children.to_vec())
    }

    fn reveal_times(
        engine: &mut RevealEngine<&'static str>,
        from: f64,
        to: f64,
        initial: Vec<RevealEffect<&'static str>>,
    ) -> Vec<(&'static str, f64)> {
        let mut seen: Vec<(&'static str, f64)> = initial
            .into_iter()
            .filter_map(|e| match e {
                RevealEffect::Reveal(n) => Some((n, from)),
                _ => None,
            })
            .collect();
        let mut t = from + 1.0;
        while t <= to {
            for effect in engine.tick(t) {
                if let RevealEffect::Reveal(n) = effect {
                    seen.push((n, t));
                }
            }
            t += 1.0;
        }
        seen
    }

    #[test]
    fn setup_hides_sections_and_children() {
        let mut engine = RevealEngine::new(RevealConfig::sections("outcomes"));
        engine.register(section("problem", &["p1", "p2"]));

        let effects = engine.setup_effects();
        assert_eq!(effects.len(), 3);
        assert_eq!(
            effects[0],
            RevealEffect::Prepare {
                node: "problem",
                offset_px: 60.0,
                transition: Transition::new(1200, Easing::Standard),
            }
        );
        assert_eq!(
            effects[2],
            RevealEffect::Prepare {
                node: "p2",
                offset_px: 40.0,
                transition: Transition::new(800, Easing::Standard),
            }
        );
    }

    #[test]
    fn below_threshold_or_not_intersecting_does_nothing() {
        let mut engine = RevealEngine::new(RevealConfig::sections("outcomes"));
        let id = engine.register(section("problem", &["p1"]));

        assert!(engine.notify(0.0, &[hit(id, 0.1)]).is_empty());
        let miss = Intersection {
            target: id,
            is_intersecting: false,
            ratio: 0.9,
        };
        assert!(engine.notify(0.0, &[miss]).is_empty());
        assert!(!engine.is_revealed(id));
        assert_eq!(engine.pending().count(), 1);
    }

    #[test]
    fn reveals_at_most_once() {
        let mut engine = RevealEngine::new(RevealConfig::sections("outcomes"));
        let id = engine.register(section("problem", &["p1", "p2"]));

        let first = engine.notify(0.0, &[hit(id, 0.5)]);
        assert!(first.contains(&RevealEffect::Release("problem")));
        engine.tick(1000.0);
        assert!(engine.is_idle());

        assert!(engine.notify(2000.0, &[hit(id, 1.0)]).is_empty());
        assert!(engine.tick(5000.0).is_empty());
        assert!(engine.is_idle());
    }

    #[test]
    fn children_reveal_inside_their_stagger_window() {
        let mut engine = RevealEngine::new(RevealConfig::sections("outcomes"));
        let children = ["c0", "c1", "c2", "c3", "c4"];
        let id = engine.register(section("features", &children));

        let trigger = 1000.0;
        let initial = engine.notify(trigger, &[hit(id, 0.3)]);
        let seen = reveal_times(&mut engine, trigger, trigger + 2000.0, initial);

        for (k, child) in children.iter().enumerate() {
            let (_, at) = seen.iter().find(|(n, _)| n == child).copied().unwrap();
            let delay = at - trigger;
            assert!(delay >= k as f64 * 150.0, "{child} too early: {delay}");
            assert!(delay < (k + 1) as f64 * 150.0, "{child} too late: {delay}");
        }
    }

    #[test]
    fn three_children_in_stats_section_end_to_end() {
        let mut engine = RevealEngine::new(RevealConfig::sections("outcomes"));
        let id = engine.register(
            section("outcomes", &["s0", "s1", "s2"])
                .with_counters(vec![("n0", 42.0), ("n1", 7.3)]),
        );

        let effects = engine.notify(0.0, &[hit(id, 0.2)]);
        assert!(effects.contains(&RevealEffect::Reveal("outcomes")));
        assert!(effects.contains(&RevealEffect::Reveal("s0")));
        assert!(!effects.contains(&RevealEffect::Reveal("s1")));

        assert_eq!(engine.tick(149.0), vec![]);
        assert_eq!(engine.tick(150.0), vec![RevealEffect::Reveal("s1")]);
        assert_eq!(engine.tick(300.0), vec![RevealEffect::Reveal("s2")]);

        assert!(engine.tick(499.0).is_empty());
        let at_start = engine.tick(500.0);
        assert_eq!(
            at_start,
            vec![RevealEffect::CounterText {
                node: "n0",
                text: "0".to_string()
            }]
        );

        // second counter waits its own 100ms
        assert!(engine
            .tick(599.0)
            .iter()
            .all(|e| !matches!(e, RevealEffect::CounterText { node: "n1", .. })));
        assert!(engine
            .tick(600.0)
            .iter()
            .any(|e| matches!(e, RevealEffect::CounterText { node: "n1", .. })));

        let mut finals = Vec::new();
        let mut t = 600.0;
        while !engine.is_idle() {
            t += 16.0;
            finals.extend(engine.tick(t));
        }
        assert!(finals.contains(&RevealEffect::CounterText {
            node: "n0",
            text: "42".to_string()
        }));
        assert!(finals.contains(&RevealEffect::CounterText {
            node: "n1",
            text: "7.3".to_string()
        }));
        // 500ms delay + 2000ms + 200ms for the second counter
        assert!(t >= 2700.0);
        assert!(engine.tick(t + 1000.0).is_empty());
    }

    #[test]
    fn non_stats_sections_never_start_counters() {
        let mut engine = RevealEngine::new(RevealConfig::sections("outcomes"));
        let id = engine.register(section("pricing", &[]).with_counters(vec![("n0", 5.0)]));
        engine.notify(0.0, &[hit(id, 1.0)]);
        assert!(engine.is_idle());
        assert!(engine.tick(3000.0).is_empty());
    }

    #[test]
    fn card_pass_staggers_across_the_batch() {
        let mut engine = RevealEngine::new(RevealConfig::cards());
        let a = engine.register(TargetSpec::new("a"));
        let b = engine.register(TargetSpec::new("b"));
        let c = engine.register(TargetSpec::new("c"));

        let quiet = Intersection {
            target: b,
            is_intersecting: false,
            ratio: 0.0,
        };
        let effects = engine.notify(0.0, &[hit(a, 0.5), quiet, hit(c, 0.1)]);
        assert_eq!(
            effects,
            vec![
                RevealEffect::Release("a"),
                RevealEffect::Release("c"),
                RevealEffect::Reveal("a"),
            ]
        );
        assert_eq!(engine.tick(100.0), vec![RevealEffect::Reveal("c")]);
        assert!(!engine.is_revealed(b));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut engine: RevealEngine<&str> = RevealEngine::new(RevealConfig::cards());
        assert!(engine.notify(0.0, &[hit(7, 1.0)]).is_empty());
    }
}
