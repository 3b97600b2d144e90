use std::{
    env,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use actix_files::{Files, NamedFile};
use actix_web::{
    dev::{fn_service, ServiceRequest, ServiceResponse},
    middleware::Logger,
    App, HttpServer,
};
use anyhow::{anyhow, Context};
use rustls::{
    pki_types::{CertificateDer, PrivateKeyDer},
    server::ServerConfig,
};
use rustls_pemfile::{certs, pkcs8_private_keys};

const DEFAULT_BIND: &str = "0.0.0.0:8444";

/* ---------- configuration ------------------------------------------------ */

struct Settings {
    bind: String,
    dist_dir: PathBuf,
    tls: Option<(PathBuf, PathBuf)>,
}

impl Settings {
    fn from_env() -> Self {
        let dist_dir = env::var("WORDSUZ_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist"));
        let tls = match (env::var("WORDSUZ_TLS_CERT"), env::var("WORDSUZ_TLS_KEY")) {
            (Ok(cert), Ok(key)) => Some((PathBuf::from(cert), PathBuf::from(key))),
            _ => None,
        };
        Self {
            bind: env::var("WORDSUZ_BIND").unwrap_or_else(|_| DEFAULT_BIND.into()),
            dist_dir,
            tls,
        }
    }
}

/* ---------- TLS ---------------------------------------------------------- */

fn load_tls(cert_path: &Path, key_path: &Path) -> anyhow::Result<ServerConfig> {
    let mut reader = BufReader::new(
        File::open(cert_path).with_context(|| format!("open {}", cert_path.display()))?,
    );
    let chain: Vec<CertificateDer<'static>> = certs(&mut reader)
        .collect::<Result<_, _>>()
        .context("parse certificate chain")?;

    let mut reader = BufReader::new(
        File::open(key_path).with_context(|| format!("open {}", key_path.display()))?,
    );
    let key = pkcs8_private_keys(&mut reader)
        .next()
        .ok_or_else(|| anyhow!("no PKCS#8 key in {}", key_path.display()))?
        .context("parse private key")?;

    ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(chain, PrivateKeyDer::Pkcs8(key))
        .context("build TLS config")
}

/* ---------- index.html fallback for client-side routes ------------------- */

async fn spa_fallback(req: ServiceRequest, index: PathBuf) -> actix_web::Result<ServiceResponse> {
    let (req, _) = req.into_parts();
    let response = NamedFile::open_async(&index).await?.into_response(&req);
    Ok(ServiceResponse::new(req, response))
}

/* ---------- main --------------------------------------------------------- */

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,actix_web=info"))
        .init();

    let settings = Settings::from_env();
    let index = settings.dist_dir.join("index.html");
    if !index.exists() {
        log::warn!("{} not found; run `trunk build` in frontend/ first", index.display());
    }
    log::info!("serving {} on {}", settings.dist_dir.display(), settings.bind);

    let dist_dir = settings.dist_dir.clone();
    let server = HttpServer::new(move || {
        let index = index.clone();
        App::new().wrap(Logger::default()).service(
            Files::new("/", &dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req| spa_fallback(req, index.clone()))),
        )
    });

    let server = match &settings.tls {
        Some((cert, key)) => {
            let tls = load_tls(cert, key)?;
            log::info!("TLS enabled");
            server.bind_rustls_0_23(settings.bind.as_str(), tls)?
        }
        None => server.bind(settings.bind.as_str())?,
    };
    server.run().await?;
    Ok(())
}
