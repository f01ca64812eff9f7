//! Shared Tailwind class constants to keep the auth and dashboard surfaces
//! visually consistent.

pub struct Theme;

impl Theme {
    /// Card wrapper used by every auth step form.
    pub const AUTH_CARD: &'static str = "flex flex-col space-y-6 w-full max-w-md mx-auto bg-white/90 dark:bg-slate-900/90 backdrop-blur-xl border border-slate-200 dark:border-emerald-900/50 p-8 rounded-3xl shadow-[0_20px_60px_-40px_rgba(15,23,42,0.35)]";

    /// Standard text input used across auth forms.
    pub const INPUT: &'static str = "w-full px-4 py-3 rounded-xl text-slate-900 dark:text-emerald-100 bg-slate-50 dark:bg-slate-800/90 border border-slate-300 dark:border-emerald-800/50 focus:outline-none focus:ring-2 focus:ring-emerald-500 transition-all";

    /// Input variant with the error border applied.
    pub const INPUT_ERROR: &'static str = "w-full px-4 py-3 rounded-xl text-slate-900 dark:text-emerald-100 bg-slate-50 dark:bg-slate-800/90 border-2 border-red-500 focus:outline-none focus:ring-2 focus:ring-red-400 transition-all";

    /// Field label above inputs.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-slate-700 dark:text-emerald-200";

    /// Inline field-level error message.
    pub const FIELD_ERROR: &'static str = "text-red-500 text-sm mt-1";

    /// Small underlined text button used for step navigation.
    pub const LINK_BUTTON: &'static str = "text-emerald-600 dark:text-emerald-400 hover:underline text-sm cursor-pointer";
}
