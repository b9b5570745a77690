use core_config::AppInfo;
use org_api::Deployment;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let app = AppInfo {
        name: env!("CARGO_BIN_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    };
    org_api::run(Deployment::Assembled, app).await
}
