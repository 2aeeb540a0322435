use std::collections::HashMap;

use crate::state::{ListState, Variable};

/// Render function for a single variable.
pub type RenderFn<R> = Box<dyn Fn(&Variable) -> R + Send + Sync>;

/// What: Per-layout render functions with a default fallback.
///
/// Details:
/// - Selection is a pure lookup keyed by `ListState::layout`; unknown keys use the default.
pub struct Renderers<R> {
    /// Layout-specific renderers.
    by_layout: HashMap<String, RenderFn<R>>,
    /// Renderer used when the layout has no entry.
    default: RenderFn<R>,
}

impl<R> Renderers<R> {
    /// Renderers with only a default.
    pub fn new(default: impl Fn(&Variable) -> R + Send + Sync + 'static) -> Self {
        Self {
            by_layout: HashMap::new(),
            default: Box::new(default),
        }
    }

    /// Register a renderer for `layout`, replacing any previous one.
    #[must_use]
    pub fn with_layout(
        mut self,
        layout: impl Into<String>,
        render: impl Fn(&Variable) -> R + Send + Sync + 'static,
    ) -> Self {
        self.by_layout.insert(layout.into(), Box::new(render));
        self
    }

    /// Layout keys with a dedicated renderer, sorted.
    #[must_use]
    pub fn layouts(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.by_layout.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Renderer for `layout`, or the default.
    #[must_use]
    pub fn select(&self, layout: &str) -> &RenderFn<R> {
        self.by_layout.get(layout).unwrap_or(&self.default)
    }

    /// What: Render every loaded variable with the state's current layout.
    ///
    /// Inputs:
    /// - `state`: List state supplying `layout` and `variables`
    ///
    /// Output:
    /// - One rendered value per variable, in list order.
    pub fn render_all(&self, state: &ListState) -> Vec<R> {
        let render = self.select(&state.layout);
        state.variables.iter().map(|v| render(v)).collect()
    }
}
