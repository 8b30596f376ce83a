pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-red-600 to-red-700 hover:from-red-700 hover:to-red-800 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg border border-red-300 px-3 py-1 text-sm font-medium text-red-600 hover:bg-red-50 disabled:opacity-40 disabled:cursor-not-allowed";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-red-600";
pub const TEXT_H1: &str = "text-4xl md:text-6xl font-bold text-red-700 dark:text-red-400 mb-2";
pub const TEXT_H2: &str = "text-3xl font-bold text-red-700 dark:text-red-400";
pub const TEXT_BODY: &str = "text-lg text-gray-600 dark:text-gray-300";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const ALERT_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const HEADER: &str = "py-8 text-center border-b border-gray-200 dark:border-gray-700";
pub const FOOTER: &str = "py-6 mt-16 border-t border-gray-200 dark:border-gray-700 text-center text-gray-500 dark:text-gray-400";

// Result modal
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/60 backdrop-blur-sm";
pub const MODAL_CARD: &str = "relative z-50 w-full max-w-md mx-4 rounded-2xl bg-white dark:bg-gray-900 p-8 shadow-2xl border border-gray-100 dark:border-gray-700";
pub const MODAL_PRIZE: &str = "text-center p-6 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-900 dark:text-white";
pub const MODAL_PRIZE_MAJOR: &str = "text-center p-6 rounded-lg bg-gradient-to-r from-yellow-300 to-yellow-500 text-gray-900";
