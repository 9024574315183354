//! インポートダイアログコンポーネント
//!
//! 表示ごとに `ImportController` を1つ作り、状態の変化を signal に流す。
//! ダイアログが閉じられたらコントローラーも閉じ、以降の更新を止める。

use crate::api::auth::SignalToken;
use crate::api::rpc::FetchImportService;
use crate::api::ticker::GlooTicker;
use crate::components::{
    preview_table::PreviewTable,
    progress_bar::ProgressBar,
    result_report::ResultReport,
    upload_area::UploadArea,
};
use crm_import_common::{
    ImportController, ImportError, ImportKind, ImportOutcome, ImportSession, ImportVariant,
    Phase, SelectedFile,
};
use gloo::file::futures::read_as_bytes;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

type Controller = ImportController<SignalToken, FetchImportService, GlooTicker>;

fn variant_for(kind: ImportKind, customer_id: &str) -> ImportVariant {
    match kind {
        ImportKind::Contact => ImportVariant::contact(customer_id.trim()),
        ImportKind::ContactMaster => ImportVariant::contact_master(),
    }
}

fn log_error(context: &str, error: &ImportError) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}

#[component]
pub fn ImportDialog<FC, FS>(
    kind: ImportKind,
    backend_url: String,
    auth_token: ReadSignal<String>,
    /// 連絡先インポートの取り込み先（マスタインポートでは未使用）
    customer_id: String,
    on_close: FC,
    on_success: FS,
) -> impl IntoView
where
    FC: Fn() + 'static + Clone + Send + Sync,
    FS: Fn(ImportOutcome) + 'static,
{
    let variant = variant_for(kind, &customer_id);
    let hint = variant.schema.describe();

    let (view_state, set_view_state) = signal(ImportSession::new(variant.clone()).view());
    let phase = Memo::new(move |_| view_state.with(|v| v.phase));

    let controller: Controller = ImportController::new(
        variant,
        SignalToken(auth_token),
        FetchImportService::new(&backend_url),
        GlooTicker,
    )
    .on_change(move |session| {
        // 破棄済みの signal には書き込まない
        set_view_state.try_set(session.view());
    })
    .on_success(move |outcome| on_success(outcome.clone()));

    let controller = StoredValue::new_local(Rc::new(controller));

    on_cleanup(move || {
        controller.try_with_value(|c| c.close());
    });

    let on_file = move |file: web_sys::File| {
        let Some(ctrl) = controller.try_get_value() else {
            return;
        };
        let name = file.name();
        // 巨大なファイルは読み込む前に弾く
        if ctrl.precheck(&name, file.size() as u64).is_err() {
            return;
        }

        spawn_local(async move {
            let file = gloo::file::File::from(file);
            match read_as_bytes(&file).await {
                Ok(bytes) => {
                    if let Err(e) = ctrl.select_file(SelectedFile::new(name, bytes)) {
                        log_error("ファイルを受け付けませんでした", &e);
                    }
                }
                Err(e) => ctrl.reject_file(ImportError::FileRead(e.to_string())),
            }
        });
    };

    let on_confirm = move |_| {
        let Some(ctrl) = controller.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = ctrl.confirm().await {
                log_error("インポート失敗", &e);
            }
        });
    };

    let on_change_file = move |_| {
        controller.try_with_value(|c| c.reset());
    };

    let close = {
        let on_close = on_close.clone();
        move || {
            controller.try_with_value(|c| c.close());
            on_close();
        }
    };

    let progress = Signal::derive(move || view_state.with(|v| v.progress));

    let error_message = move || {
        view_state
            .with(|v| v.error.clone())
            .map(|message| view! { <p class="error-message">{message}</p> })
    };

    let body = move || match phase.get() {
        Phase::Selecting => view! {
            <UploadArea hint=hint.clone() on_file=on_file.clone() />
            {error_message}
        }
        .into_any(),
        Phase::Previewing => {
            let file_name = view_state.with_untracked(|v| v.file_name.clone()).unwrap_or_default();
            let preview = view_state.with_untracked(|v| v.preview.clone()).unwrap_or_default();
            view! {
                <p class="file-name">{format!("📄 {}", file_name)}</p>
                <PreviewTable preview=preview />
                {error_message}
                <div class="dialog-actions">
                    <button class="btn btn-secondary" on:click=on_change_file>
                        "ファイルを変更"
                    </button>
                    <button class="btn btn-primary" on:click=on_confirm>
                        "インポート"
                    </button>
                </div>
            }
            .into_any()
        }
        Phase::Importing => view! { <ProgressBar progress=progress /> }.into_any(),
        Phase::Reporting => {
            let outcome = view_state.with_untracked(|v| v.outcome.clone()).unwrap_or_default();
            view! { <ResultReport outcome=outcome /> }.into_any()
        }
    };

    let close_button = close.clone();

    view! {
        <div class="dialog-overlay">
            <div class="dialog" role="dialog">
                <div class="dialog-header">
                    <div>
                        <h2>{move || phase.get().title()}</h2>
                        <p class="text-muted">{move || phase.get().description()}</p>
                    </div>
                    <button class="btn-close" on:click=move |_| close_button()>"×"</button>
                </div>
                <div class="dialog-body">{body}</div>
                <Show when=move || phase.get() == Phase::Reporting>
                    <div class="dialog-actions">
                        <button class="btn btn-primary" on:click={
                            let close = close.clone();
                            move |_| close()
                        }>
                            "閉じる"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
