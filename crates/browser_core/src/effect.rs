use crate::policy::EffectivePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load `url` on the web surface under the given policy flags.
    Render { url: String, policy: EffectivePolicy },
    /// Step the surface back one history entry.
    GoBack,
    /// Step the surface forward one history entry.
    GoForward,
    /// Reload the current page, re-applying the given policy flags first.
    Reload { policy: EffectivePolicy },
}
