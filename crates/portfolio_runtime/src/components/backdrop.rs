use super::*;

const BLOB_CLASSES: [&str; 4] = [
    "backdrop-blob backdrop-blob-blue",
    "backdrop-blob backdrop-blob-pink backdrop-blob-wide",
    "backdrop-blob backdrop-blob-purple",
    "backdrop-blob backdrop-blob-yellow backdrop-blob-wide",
];

#[component]
/// Fixed decorative layer behind the page: four gradient blobs that drift
/// with the scroll position, under a faint grid overlay.
pub fn AnimatedBackdrop() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let host = runtime.host;
    let scroll_y = create_rw_signal(host.get_value().current_scroll_y());

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        scroll_y.set(host.get_value().current_scroll_y());
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <div class="site-backdrop" aria-hidden="true">
            <For each=move || 0..BLOB_CLASSES.len() key=|blob_index| *blob_index let:blob_index>
                <div
                    class=BLOB_CLASSES[blob_index]
                    style=move || {
                        let (x, y) = motion::backdrop_offset(scroll_y.get(), blob_index);
                        format!(
                            "transform: translate({x}px, {y}px); transition: transform 1.4s ease-out;"
                        )
                    }
                ></div>
            </For>
            <div class="site-backdrop-grid"></div>
        </div>
    }
}
