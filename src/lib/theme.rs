//! Shared Tailwind class constants to keep list markup consistent.

pub struct Theme;

impl Theme {
    /// Card container wrapping a section of content.
    pub const CARD: &'static str = "overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg";

    /// Card header strip.
    pub const CARD_HEADER: &'static str = "px-6 py-3 bg-gray-50 dark:bg-gray-900/50 border-b border-gray-200 dark:border-gray-700 text-sm font-semibold text-gray-700 dark:text-gray-200";

    /// List row with name and email stacked.
    pub const LIST_ITEM: &'static str = "px-6 py-4 flex flex-col gap-0.5 hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors";

    /// Centered muted placeholder row.
    pub const EMPTY_ROW: &'static str = "px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400";
}
