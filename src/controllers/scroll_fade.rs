use crate::{
    animation::ease::Ease,
    animation::registry,
    animation::trigger::{ScrollTrigger, ToggleAction, ToggleActions, TriggerPosition},
    animation::tween::{Lerp, Tween},
    foundation::core::Viewport,
    foundation::error::{ChiliError, ChiliResult},
    page::document::{Document, ElementId},
};

/// Opacity and vertical offset of a fading element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeState {
    pub opacity: f64,
    pub offset_y: f64,
}

impl FadeState {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset_y: 50.0,
    };
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

impl Lerp for FadeState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            offset_y: f64::lerp(&a.offset_y, &b.offset_y, t),
        }
    }
}

/// Tween and trigger shared by every fade-in. Missing JSON fields keep their defaults.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeInSpec {
    pub from: FadeState,
    pub to: FadeState,
    pub duration_s: f64,
    pub ease: Ease,
    pub start: TriggerPosition,
    pub end: TriggerPosition,
    pub actions: ToggleActions,
}

impl Default for FadeInSpec {
    fn default() -> Self {
        Self {
            from: FadeState::HIDDEN,
            to: FadeState::SHOWN,
            duration_s: 1.0,
            ease: Ease::OutQuad,
            start: TriggerPosition::TOP_80,
            end: TriggerPosition::BOTTOM_TOP,
            actions: ToggleActions::PLAY_NONE_NONE_REVERSE,
        }
    }
}

#[derive(Debug)]
struct FadeBinding {
    element: ElementId,
    trigger: ScrollTrigger,
    tween: Tween<FadeState>,
}

impl FadeBinding {
    fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.tween.play(),
            ToggleAction::Pause => self.tween.pause(),
            ToggleAction::Resume => self.tween.resume(),
            ToggleAction::Reverse => self.tween.reverse(),
            ToggleAction::Restart => self.tween.restart(),
            ToggleAction::Reset => {
                self.tween.pause();
                self.tween.seek(0.0);
            }
            ToggleAction::Complete => self.tween.complete(),
            ToggleAction::None => {}
        }
    }

    fn write_style(&self, doc: &mut Document) {
        let state = self.tween.value();
        if let Some(el) = doc.get_mut(self.element) {
            el.style.opacity = Some(state.opacity);
            el.style.translate_y = Some(state.offset_y);
        }
    }
}

/// Scroll-triggered fade-in for every element tagged animatable.
///
/// Elements are discovered once, by [`ScrollFadeController::register_animations`]; content
/// mounted later does not take part. Each element has its own trigger and tween.
#[derive(Debug)]
pub struct ScrollFadeController {
    spec: FadeInSpec,
    bindings: Vec<FadeBinding>,
    registered: bool,
}

impl ScrollFadeController {
    pub fn new(spec: FadeInSpec) -> Self {
        Self {
            spec,
            bindings: Vec::new(),
            registered: false,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn registered_count(&self) -> usize {
        self.bindings.len()
    }

    /// Scan `doc` and bind a trigger and tween to each animatable element, putting it in its
    /// hidden state. Runs once; later calls return the existing count.
    #[tracing::instrument(skip(self, doc))]
    pub fn register_animations(
        &mut self,
        doc: &mut Document,
        viewport: Viewport,
    ) -> ChiliResult<usize> {
        if self.registered {
            return Ok(self.bindings.len());
        }
        if !registry::scroll_trigger_enabled() {
            return Err(ChiliError::lifecycle(
                "scroll trigger plugin must be registered before animations",
            ));
        }

        let spec = self.spec;
        for id in doc.query_animatable() {
            let Some(el) = doc.get(id) else {
                continue;
            };
            let trigger = ScrollTrigger::for_element(
                el.rect,
                viewport.height,
                spec.start,
                spec.end,
                spec.actions,
            );
            let tween = Tween::new(spec.from, spec.to, spec.duration_s, spec.ease)?;
            let binding = FadeBinding {
                element: id,
                trigger,
                tween,
            };
            binding.write_style(doc);
            self.bindings.push(binding);
        }

        self.registered = true;
        tracing::info!(count = self.bindings.len(), "scroll fade-ins registered");
        Ok(self.bindings.len())
    }

    /// Evaluate triggers at `scroll_y`, then advance every tween by `dt_s`.
    pub fn update(&mut self, scroll_y: f64, dt_s: f64, doc: &mut Document) {
        for binding in &mut self.bindings {
            let actions = binding.trigger.actions();
            for cb in binding.trigger.update(scroll_y) {
                tracing::trace!(element = binding.element.0, ?cb, "scroll trigger");
                binding.apply(actions.action_for(cb));
            }
            binding.tween.advance(dt_s);
            binding.write_style(doc);
        }
    }

    pub fn state_of(&self, id: ElementId) -> Option<FadeState> {
        self.bindings
            .iter()
            .find(|b| b.element == id)
            .map(|b| b.tween.value())
    }

    /// Page scroll offset at which `id` starts fading in.
    pub fn trigger_start(&self, id: ElementId) -> Option<f64> {
        self.bindings
            .iter()
            .find(|b| b.element == id)
            .map(|b| b.trigger.start())
    }
}

impl Default for ScrollFadeController {
    fn default() -> Self {
        Self::new(FadeInSpec::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controllers/scroll_fade.rs"]
mod tests;
