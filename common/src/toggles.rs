pub const SIDEBAR_HIDDEN_CLASS: &str = "-translate-x-full";

pub trait ClassToggle {
    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
}

pub trait DisplayStyle {
    fn set_display(&self, value: &str);
}

/// Slides the sidebar in or out. Returns `true` when it ends up hidden.
pub fn toggle_sidebar<E: ClassToggle + ?Sized>(sidebar: &E) -> bool {
    sidebar.toggle_class(SIDEBAR_HIDDEN_CLASS)
}

/// Shows the full comment and hides the "view more" control. There is no way back.
pub fn expand_comment<F, M>(full_comment: &F, view_more: &M)
where
    F: DisplayStyle + ?Sized,
    M: DisplayStyle + ?Sized,
{
    full_comment.set_display("block");
    view_more.set_display("none");
}
