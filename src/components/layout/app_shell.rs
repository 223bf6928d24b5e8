//! Shared layout wrapper with the header and content container so routes can
//! focus on content.

use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <header class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700">
                <div class="max-w-screen-md flex items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                    >
                        <span class="text-xl font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Roster"
                        </span>
                    </A>
                    <nav class="flex items-center gap-6 text-sm font-medium">
                        <A
                            href="/"
                            {..}
                            class="text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                        >
                            "Users"
                        </A>
                        <A
                            href="/health"
                            {..}
                            class="text-gray-500 hover:text-gray-900 dark:text-gray-400 dark:hover:text-white"
                        >
                            "Build"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="flex-1 w-full max-w-screen-md mx-auto px-4 py-8">{children()}</main>
        </div>
    }
}
