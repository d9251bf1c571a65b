use contracts::domain::a001_collection::CollectionId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_bulk_import::{
    BulkImport, BulkImportForm, ImportPhase, ImportProgressState,
};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Spinner};

use super::api;
use crate::shared::browser::alert;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_session;

const AUTO_CLOSE_MS: u32 = 3_000;

/// `href` of the "download remaining rows" link
pub fn csv_data_url(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8,{}", urlencoding::encode(csv))
}

/// Upload a CSV of product URLs and follow the import live.
///
/// `on_close` receives whether any item was created. Closing is refused while
/// the upload runs.
#[component]
pub fn BulkImportModal(collection_id: CollectionId, on_close: Callback<bool>) -> impl IntoView {
    let session = use_session();
    let file_input = NodeRef::<html::Input>::new();
    let apply_mapping = RwSignal::new(true);
    let progress = RwSignal::new(ImportProgressState::new());
    // Bumped per run and on close; events of an older run are dropped
    let generation = StoredValue::new(0u32);

    let is_busy = Memo::new(move |_| progress.with(|p| p.phase.is_busy()));

    let request_close = Callback::new(move |_: ()| {
        if is_busy.get_untracked() {
            return;
        }
        generation.update_value(|g| *g += 1);
        on_close.run(progress.with_untracked(|p| p.has_changes()));
    });

    let start = move || {
        let Some(file) = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            alert("Please choose a CSV file.");
            return;
        };
        if !BulkImportForm::accepts_file_name(&file.name()) {
            alert("Only .csv files can be imported.");
            return;
        }

        generation.update_value(|g| *g += 1);
        let run = generation.get_value();
        let is_current = move || generation.try_get_value() == Some(run);
        progress.update(|p| p.begin_upload());

        let form = BulkImportForm::new(collection_id, apply_mapping.get_untracked());
        let session = session.get_untracked();
        spawn_local(async move {
            let result = api::stream_bulk_import(&session, &form, &file, |event| {
                if is_current() {
                    progress.try_update(|p| p.apply(event));
                }
            })
            .await;
            if !is_current() {
                return;
            }
            progress.try_update(|p| match result {
                Ok(()) => p.finish_stream(),
                Err(e) => p.fail(e),
            });

            if progress.with_untracked(|p| p.should_auto_close()) {
                TimeoutFuture::new(AUTO_CLOSE_MS).await;
                if is_current() {
                    log::info!("{}: finished, closing", BulkImport::full_name());
                    generation.update_value(|g| *g += 1);
                    on_close.run(true);
                }
            }
        });
    };

    let counters = move || {
        progress.with(|p| {
            format!(
                "{} / {} processed · {} imported · {} failed",
                p.current, p.total, p.success, p.failed
            )
        })
    };

    view! {
        <Modal title=BulkImport::display_name() on_close=request_close>
            <p class="form__help">
                "One product URL per row, in a column named \"url\". Every row is scraped and saved as a new item."
            </p>
            <div class="form">
                <div class="form__group">
                    <label class="form__label">"CSV file"</label>
                    <input
                        type="file"
                        accept=".csv,text/csv"
                        class="input"
                        node_ref=file_input
                        disabled=move || is_busy.get()
                    />
                </div>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || apply_mapping.get()
                        on:change=move |ev| apply_mapping.set(event_target_checked(&ev))
                        disabled=move || is_busy.get()
                    />
                    "Apply the saved field mapping"
                </label>
            </div>

            <Show when=move || progress.with(|p| p.phase != ImportPhase::Idle)>
                <div class="import-progress">
                    <div class="progress-bar">
                        <div
                            class="progress-bar__fill"
                            style:width=move || format!("{}%", progress.with(|p| p.percent_rounded()))
                        ></div>
                    </div>
                    <div class="import-progress__summary">
                        <Show when=move || is_busy.get()>
                            <Spinner />
                        </Show>
                        <span>{move || format!("{}%", progress.with(|p| p.percent_rounded()))}</span>
                        <span>{counters}</span>
                    </div>

                    {move || progress.with(|p| p.fatal.clone()).map(|message| view! {
                        <div class="warning-box">{message}</div>
                    })}

                    {move || progress.with(|p| p.blocked_message.clone()).map(|message| {
                        let (count, csv) = progress.with(|p| (p.remaining_urls.len(), p.remaining_csv()));
                        let href = csv
                            .map_err(|e| log::error!("Failed to build remaining rows CSV: {}", e))
                            .ok()
                            .filter(|_| count > 0)
                            .map(|csv| csv_data_url(&csv));
                        view! {
                            <div class="warning-box">
                                <div>{message}</div>
                                {href.map(|href| view! {
                                    <a class="button button--secondary" href=href download="remaining_urls.csv">
                                        {format!("Download the {} remaining rows", count)}
                                    </a>
                                })}
                            </div>
                        }
                    })}

                    <Show when=move || progress.with(|p| !p.errors.is_empty())>
                        <ul class="import-progress__errors">
                            {move || progress.with(|p| {
                                p.errors
                                    .iter()
                                    .map(|e| view! { <li>{e.clone()}</li> })
                                    .collect_view()
                            })}
                        </ul>
                    </Show>

                    <Show when=move || progress.with(|p| p.should_auto_close())>
                        <div class="form__help">"All rows imported. Closing..."</div>
                    </Show>
                </div>
            </Show>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=is_busy
                    on_click=move |_| request_close.run(())
                >
                    "Close"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_busy
                    on_click=move |_| start()
                >
                    "Start import"
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_data_url_is_encoded() {
        assert_eq!(
            csv_data_url("url\nhttps://a/?q=1\n"),
            "data:text/csv;charset=utf-8,url%0Ahttps%3A%2F%2Fa%2F%3Fq%3D1%0A"
        );
    }
}
