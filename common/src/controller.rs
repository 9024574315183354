//! インポートセッションの非同期駆動
//!
//! 状態機械（`ImportSession`）に認証・RPC・タイマーをつなぐ。
//! 単一スレッド前提で、セッションは `RefCell` で保持し、
//! await をまたいで借用しない。

use crate::error::{ImportError, Result};
use crate::file::SelectedFile;
use crate::progress::ProgressPlan;
use crate::reconcile::ImportOutcome;
use crate::service::{AuthTokenProvider, ImportRequest, ImportService, Ticker};
use crate::session::{ImportSession, Phase, SessionView};
use crate::variant::ImportVariant;
use futures::future::{self, Either};
use std::cell::{Cell, RefCell};

type Listener = Box<dyn Fn(&ImportSession)>;
type SuccessHandler = Box<dyn Fn(&ImportOutcome)>;

/// ダイアログ1つ分のインポート制御
///
/// メソッドは `&self` で呼べるため、`Rc` で包んでイベントハンドラ間で共有できる。
/// リスナーからコントローラーを再度呼び出してはならない。
pub struct ImportController<A, S, T> {
    session: RefCell<ImportSession>,
    auth: A,
    service: S,
    ticker: T,
    closed: Cell<bool>,
    on_change: Option<Listener>,
    on_success: Option<SuccessHandler>,
}

impl<A, S, T> ImportController<A, S, T>
where
    A: AuthTokenProvider,
    S: ImportService,
    T: Ticker,
{
    pub fn new(variant: ImportVariant, auth: A, service: S, ticker: T) -> Self {
        Self {
            session: RefCell::new(ImportSession::new(variant)),
            auth,
            service,
            ticker,
            closed: Cell::new(false),
            on_change: None,
            on_success: None,
        }
    }

    pub fn with_plan(self, plan: ProgressPlan) -> Self {
        let variant = self.session.borrow().variant().clone();
        self.session.replace(ImportSession::with_plan(variant, plan));
        self
    }

    /// 状態が変わるたびに呼ばれる
    pub fn on_change(mut self, listener: impl Fn(&ImportSession) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// `Reporting` に到達したときに呼ばれる
    pub fn on_success(mut self, handler: impl Fn(&ImportOutcome) + 'static) -> Self {
        self.on_success = Some(Box::new(handler));
        self
    }

    pub fn phase(&self) -> Phase {
        self.session.borrow().phase()
    }

    pub fn snapshot(&self) -> SessionView {
        self.session.borrow().view()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// ファイル選択（解析と検証のみ、通信なし）
    pub fn select_file(&self, file: SelectedFile) -> Result<()> {
        let result = self.session.borrow_mut().select_file(file);
        self.notify();
        result
    }

    /// 読み込み前の拡張子・サイズ検査
    pub fn precheck(&self, name: &str, size: u64) -> Result<()> {
        let result = self.session.borrow_mut().precheck(name, size);
        if result.is_err() {
            self.notify();
        }
        result
    }

    /// ファイル読み込み失敗などを選択画面に表示する
    pub fn reject_file(&self, error: ImportError) {
        self.session.borrow_mut().reject_file(error);
        self.notify();
    }

    /// インポート確定
    ///
    /// `Previewing` 以外では何もせず `Ok(None)` を返す（通信は発生しない）。
    /// 通信中は疑似プログレスを進め、応答到着でタイマーを破棄する。
    /// 失敗時はセッションが `Previewing` に戻り、同じエラーを返す。
    pub async fn confirm(&self) -> Result<Option<ImportOutcome>> {
        let request = self.session.borrow_mut().begin_import();
        let Some(request) = request else {
            tracing::debug!(phase = self.phase().as_str(), "インポート確定を無視");
            return Ok(None);
        };
        self.notify();

        let exchange = self.exchange(&request);
        let ticking = self.tick_while_open();
        futures::pin_mut!(exchange);
        futures::pin_mut!(ticking);

        let response = match future::select(exchange, ticking).await {
            Either::Left((response, _ticking)) => response,
            Either::Right(((), exchange)) => exchange.await,
        };

        let failure = response.as_ref().err().cloned();
        let outcome = {
            let mut session = self.session.borrow_mut();
            session.complete(response);
            session.outcome().cloned()
        };
        self.notify();

        match (outcome, failure) {
            (_, Some(e)) => Err(e),
            (Some(outcome), None) => {
                if let Some(handler) = &self.on_success {
                    handler(&outcome);
                }
                Ok(Some(outcome))
            }
            (None, None) => Ok(None),
        }
    }

    async fn exchange(&self, request: &ImportRequest) -> Result<serde_json::Value> {
        let token = self.auth.auth_token().await?;
        self.service.send(request, &token).await
    }

    /// 閉じられるまで一定間隔で進捗を進める（自身は完了しない）
    async fn tick_while_open(&self) {
        let interval = self.session.borrow().progress_plan().interval;
        while !self.closed.get() {
            self.ticker.tick(interval).await;
            if self.closed.get() {
                break;
            }
            self.session.borrow_mut().tick();
            self.notify();
        }
        future::pending::<()>().await
    }

    /// 「ファイルを変更」: 最初の状態に戻す（インポート中は不可）
    pub fn reset(&self) -> bool {
        let reset = self.session.borrow_mut().reset();
        if reset {
            self.notify();
        }
        reset
    }

    /// ダイアログを閉じる
    ///
    /// 以降は進捗更新も通知も行わない。通信中のリクエストは取り消せない。
    pub fn close(&self) {
        if self.phase() == Phase::Importing {
            tracing::warn!("インポート中にダイアログを閉じました（リクエストは継続します）");
        }
        self.closed.set(true);
        self.session.borrow_mut().reset();
    }

    fn notify(&self) {
        if self.closed.get() {
            return;
        }
        if let Some(listener) = &self.on_change {
            listener(&self.session.borrow());
        }
    }
}
