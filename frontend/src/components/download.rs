//! Download link for the extracted text.

use leptos::*;
use crate::error::format_size;
use crate::orchestrator::UploadView;

#[component]
pub fn DownloadLink(
    /// Upload form view model
    view: Memo<UploadView>,
    /// Object URL of the artifact
    href: Signal<Option<String>>,
) -> impl IntoView {
    let offer = move || {
        let offer = view.with(|v| v.download.clone())?;
        let href = href.get()?;
        Some((offer, href))
    };

    view! {
        {move || offer().map(|(offer, href)| view! {
            <a class="download-button" href=href download=offer.file_name.clone()>
                "⬇️ Download " {offer.file_name.clone()}
                " (" {format_size(offer.size_bytes as u64)} ")"
            </a>
        })}
    }
}
