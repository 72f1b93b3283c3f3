//! Server-side rendering for Spin/WASI.

use std::sync::Once;

use leptos::{
    config::{get_configuration, LeptosOptions},
    task::Executor as LeptosExecutor,
};
use leptos_wasi::{
    handler::HandlerError,
    prelude::{IncomingRequest, ResponseOutparam, WasiExecutor},
};
use tracing_subscriber::EnvFilter;
use waitlist_core::{WaitlistConfig, BASE_URL_ENV};
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;

use crate::api::JoinWaitlist;
use crate::app::{shell, App};

struct LandingServer;

impl Guest for LandingServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        init_tracing();

        let leptos_options = match get_configuration(None) {
            Ok(conf) => conf.leptos_options,
            Err(e) => {
                tracing::error!(error = %e, "failed to load leptos configuration");
                return;
            }
        };

        let executor = WasiExecutor::new(leptos_wasi::executor::Mode::Stalled);
        if let Err(e) = LeptosExecutor::init_local_custom_executor(executor.clone()) {
            tracing::error!(error = ?e, "executor init error");
            return;
        }
        executor.run_until(async {
            if let Err(e) = handle_request(request, response_out, leptos_options).await {
                tracing::error!(error = ?e, "request error");
            }
        })
    }
}

async fn handle_request(
    request: IncomingRequest,
    response_out: ResponseOutparam,
    leptos_options: LeptosOptions,
) -> Result<(), HandlerError> {
    use leptos_wasi::prelude::Handler;

    Handler::build(request, response_out)?
        .with_server_fn::<JoinWaitlist>()
        .generate_routes(App)
        .handle_with_context(move || shell(leptos_options.clone()), || {})
        .await?;

    Ok(())
}

/// Install the stderr subscriber once per component instance.
fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init();

        if let Err(e) = WaitlistConfig::from_build_env() {
            tracing::warn!(
                error = %e,
                "{} was not usable at build time; signups will fail",
                BASE_URL_ENV
            );
        }
    });
}

export!(LandingServer with_types_in wasi);
