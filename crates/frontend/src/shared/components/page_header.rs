use leptos::prelude::*;

#[component]
pub fn PageHeader(
    title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header" style="display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 16px;">
            <div>
                <h1 style="font-size: 24px; font-weight: bold; margin: 0;">{title}</h1>
                {subtitle.map(|s| view! {
                    <p style="color: var(--colorNeutralForeground3); margin: 4px 0 0 0;">{s}</p>
                })}
            </div>
            {children.map(|c| view! { <div class="page-header__actions">{c()}</div> })}
        </div>
    }
}
