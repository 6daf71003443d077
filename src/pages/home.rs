//! Home Page
//!
//! Landing page describing the portal shell.

use leptos::prelude::*;

use crate::components::{MainLayout, SidebarNav};

const FEATURES: &[(&str, &str)] = &[
    (
        "Responsive Design",
        "Fully responsive layout that works on desktop, tablet, and mobile devices.",
    ),
    (
        "Dark Mode",
        "Toggle between light and dark themes with persistent preferences.",
    ),
    (
        "Content Pages",
        "Every documentation slug resolves through a pluggable content loader.",
    ),
];

const LAYOUT_FEATURES: &[(&str, &str)] = &[
    ("280px sidebar", " on desktop with collapsible mobile view"),
    (
        "Responsive breakpoints:",
        " Mobile (< 768px), Tablet (768px - 1024px), Desktop (> 1024px)",
    ),
    ("Theme toggle", " with system preference detection"),
    ("Smooth animations", " and transitions"),
    ("Accessible navigation", " with keyboard support"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <MainLayout
            sidebar=|| view! { <SidebarNav /> }
            header=|| view! { <h1 class="header-title">"Welcome to Documentation Portal"</h1> }
        >
            <div class="page-body">
                <h1 class="page-title">"Documentation Portal"</h1>

                <p class="lead">
                    "Welcome to your documentation portal. This layout features a responsive "
                    "sidebar, dark mode toggle, and modern design."
                </p>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, text)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <h2>"Layout Features"</h2>
                <ul class="feature-list">
                    {LAYOUT_FEATURES
                        .iter()
                        .map(|(label, rest)| {
                            view! {
                                <li>
                                    <strong>{*label}</strong>
                                    {*rest}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="callout">
                    <h4>"Test the Layout"</h4>
                    <p>
                        "Try resizing your browser window to see the responsive behavior, "
                        "or click the theme toggle in the header to switch between light and dark modes. "
                        "On mobile devices, use the menu button to open the sidebar."
                    </p>
                </div>
            </div>
        </MainLayout>
    }
}
