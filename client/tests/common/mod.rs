//! In-process stand-in for a Gaia REST server.

#![allow(dead_code)]

use actix_web::{dev::ServerHandle, web, App, HttpServer};
use gaia_client::{Connection, GaiaClient, Scheme};
use rustls::{
    pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer},
    ServerConfig,
};
use std::{sync::Arc, time::Duration};

pub struct MockNode {
    pub connection: Connection,
    handle: ServerHandle,
}

impl MockNode {
    /// Starts a plain HTTP server on an ephemeral port with the routes
    /// registered by `routes`.
    pub async fn start<F>(routes: F) -> MockNode
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        Self::serve(routes, None)
    }

    /// Same as [`start`](Self::start), but over HTTPS with a freshly
    /// generated self-signed certificate.
    pub async fn start_tls<F>(routes: F) -> MockNode
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        Self::serve(routes, Some(self_signed_config()))
    }

    fn serve<F>(routes: F, tls: Option<ServerConfig>) -> MockNode
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let server = HttpServer::new(move || App::new().configure(routes.clone())).workers(1);
        let (server, scheme) = match tls {
            Some(config) => (
                server
                    .bind_rustls_0_23(("127.0.0.1", 0), config)
                    .expect("bind mock node"),
                Scheme::Https,
            ),
            None => (
                server.bind(("127.0.0.1", 0)).expect("bind mock node"),
                Scheme::Http,
            ),
        };
        let port = server.addrs()[0].port();
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        MockNode {
            connection: Connection::new(scheme, "127.0.0.1", port),
            handle,
        }
    }

    pub fn client(&self) -> GaiaClient {
        GaiaClient::new(self.connection.clone()).expect("build client")
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> GaiaClient {
        GaiaClient::builder(self.connection.clone())
            .timeout(timeout)
            .build()
            .expect("build client")
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn self_signed_config() -> ServerConfig {
    let subject_alt_names = vec!["localhost".to_string(), "127.0.0.1".to_string()];
    let cert = rcgen::generate_simple_self_signed(subject_alt_names).expect("generate cert");
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(cert.key_pair.serialize_der()));

    ServerConfig::builder_with_provider(Arc::new(rustls::crypto::ring::default_provider()))
        .with_safe_default_protocol_versions()
        .expect("protocol versions")
        .with_no_client_auth()
        .with_single_cert(vec![cert.cert.der().clone()], key)
        .expect("server certificate")
}
