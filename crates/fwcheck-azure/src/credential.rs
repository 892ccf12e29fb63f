use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::env::AmbientEnv;
use crate::error::CredentialError;

const IMDS_HOST: &str = "http://169.254.169.254";

// ── Token credential ──────────────────────────────────────────────────────────

/// Abstraction over Azure token acquisition — enables test injection.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    /// A bearer token for the ARM management plane.
    async fn token(&self) -> Result<String, CredentialError>;
}

/// Bearer token cached until shortly before it expires.
struct TokenCache {
    slot: Mutex<Option<(String, Instant)>>,
}

impl TokenCache {
    fn new() -> Self {
        Self { slot: Mutex::new(None) }
    }

    async fn get(&self) -> Option<String> {
        let guard = self.slot.lock().await;
        match guard.as_ref() {
            Some((tok, expiry)) if Instant::now() < *expiry => Some(tok.clone()),
            _ => None,
        }
    }

    async fn put(&self, tok: &str, lifetime: Duration) {
        let expiry = Instant::now() + lifetime.saturating_sub(Duration::from_secs(60));
        *self.slot.lock().await = Some((tok.to_string(), expiry));
    }
}

/// Token lifetime from either `expires_in` (seconds from now) or `expires_on`
/// (unix seconds). Both arrive as numbers or numeric strings depending on
/// the endpoint.
fn token_lifetime(resp: &Value) -> Option<Duration> {
    let num = |v: &Value| v.as_u64().or_else(|| v.as_str().and_then(|s| s.parse::<u64>().ok()));
    if let Some(secs) = num(&resp["expires_in"]) {
        return Some(Duration::from_secs(secs));
    }
    let on = i64::try_from(num(&resp["expires_on"])?).ok()?;
    let remaining = on - chrono::Utc::now().timestamp();
    u64::try_from(remaining).ok().map(Duration::from_secs)
}

fn access_token(resp: &Value, field: &str, source: &str) -> Result<String, CredentialError> {
    resp[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            let detail = resp["error_description"]
                .as_str()
                .or_else(|| resp["error"].as_str())
                .unwrap_or("no access token in response");
            CredentialError::Token(format!("{}: {}", source, detail))
        })
}

// ── Client credentials (Service Principal, Workload Identity) ────────────────

/// How an app registration proves its identity to the login endpoint.
enum ClientProof {
    Secret(String),
    /// Kubernetes-projected service account token. The kubelet rotates the
    /// file in place, so it is read on every exchange.
    FederatedTokenFile(PathBuf),
}

/// Client-credentials grant against `{login}/{tenant}/oauth2/v2.0/token`.
struct ClientCredential {
    tenant_id:  String,
    client_id:  String,
    proof:      ClientProof,
    login_base: String,
    audience:   String,
    client:     reqwest::Client,
    cache:      TokenCache,
}

impl ClientCredential {
    fn label(&self) -> &'static str {
        match self.proof {
            ClientProof::Secret(_) => "SP token",
            ClientProof::FederatedTokenFile(_) => "workload identity token",
        }
    }
}

#[async_trait]
impl TokenCredential for ClientCredential {
    async fn token(&self) -> Result<String, CredentialError> {
        if let Some(tok) = self.cache.get().await {
            return Ok(tok);
        }

        let label = self.label();
        let url = format!("{}/{}/oauth2/v2.0/token", self.login_base, self.tenant_id);
        let scope = format!("{}/.default", self.audience);
        let mut params = vec![
            ("grant_type", "client_credentials".to_string()),
            ("client_id", self.client_id.clone()),
            ("scope", scope),
        ];
        match &self.proof {
            ClientProof::Secret(secret) => params.push(("client_secret", secret.clone())),
            ClientProof::FederatedTokenFile(path) => {
                let assertion = tokio::fs::read_to_string(path).await.map_err(|e| {
                    CredentialError::Token(format!("read federated token {}: {}", path.display(), e))
                })?;
                params.push((
                    "client_assertion_type",
                    "urn:ietf:params:oauth:client-assertion-type:jwt-bearer".to_string(),
                ));
                params.push(("client_assertion", assertion.trim().to_string()));
            }
        }

        debug!(tenant_id = %self.tenant_id, client_id = %self.client_id, "requesting {}", label);
        let resp: Value = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| CredentialError::Token(format!("{} request: {}", label, e)))?
            .json()
            .await
            .map_err(|e| CredentialError::Token(format!("{} decode: {}", label, e)))?;

        let tok = access_token(&resp, "access_token", label)?;
        let lifetime = token_lifetime(&resp).unwrap_or(Duration::from_secs(3600));
        self.cache.put(&tok, lifetime).await;
        Ok(tok)
    }
}

// ── Managed Identity ──────────────────────────────────────────────────────────

enum IdentityEndpoint {
    /// App Service / Functions / Container Apps (`IDENTITY_ENDPOINT` + `IDENTITY_HEADER`).
    AppService { endpoint: String, header: String },
    /// Instance Metadata Service on VMs and AKS.
    Imds { host: String },
}

struct ManagedIdentityCredential {
    endpoint:  IdentityEndpoint,
    /// User-assigned identity; `None` selects the system-assigned one.
    client_id: Option<String>,
    audience:  String,
    client:    reqwest::Client,
    cache:     TokenCache,
}

#[async_trait]
impl TokenCredential for ManagedIdentityCredential {
    async fn token(&self) -> Result<String, CredentialError> {
        if let Some(tok) = self.cache.get().await {
            return Ok(tok);
        }

        let mut query = vec![("resource", self.audience.clone())];
        if let Some(cid) = &self.client_id {
            query.push(("client_id", cid.clone()));
        }

        let req = match &self.endpoint {
            IdentityEndpoint::AppService { endpoint, header } => {
                query.push(("api-version", "2019-08-01".into()));
                self.client.get(endpoint).header("X-IDENTITY-HEADER", header)
            }
            IdentityEndpoint::Imds { host } => {
                query.push(("api-version", "2018-02-01".into()));
                self.client
                    .get(format!("{}/metadata/identity/oauth2/token", host))
                    .header("Metadata", "true")
            }
        };

        let resp: Value = req
            .query(&query)
            .send()
            .await
            .map_err(|e| CredentialError::Token(format!("managed identity token request: {}", e)))?
            .json()
            .await
            .map_err(|e| CredentialError::Token(format!("managed identity token decode: {}", e)))?;

        let tok = access_token(&resp, "access_token", "managed identity token")?;
        let lifetime = token_lifetime(&resp).unwrap_or(Duration::from_secs(3600));
        self.cache.put(&tok, lifetime).await;
        Ok(tok)
    }
}

// ── Azure CLI ─────────────────────────────────────────────────────────────────

struct AzureCliCredential {
    program:   PathBuf,
    tenant_id: Option<String>,
    audience:  String,
    cache:     TokenCache,
}

#[async_trait]
impl TokenCredential for AzureCliCredential {
    async fn token(&self) -> Result<String, CredentialError> {
        if let Some(tok) = self.cache.get().await {
            return Ok(tok);
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(["account", "get-access-token", "--resource", self.audience.as_str(), "--output", "json"]);
        if let Some(tenant) = &self.tenant_id {
            cmd.args(["--tenant", tenant.as_str()]);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| CredentialError::Token(format!("run az CLI: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CredentialError::Token(format!(
                "az account get-access-token failed: {}. Run 'az login' first.",
                stderr.trim()
            )));
        }

        let resp: Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| CredentialError::Token(format!("az CLI output parse: {}", e)))?;
        let tok = access_token(&resp, "accessToken", "az CLI")?;
        // Older CLI releases only report a local-time `expiresOn`; those
        // tokens are not cached.
        if let Some(lifetime) = token_lifetime(&resp) {
            self.cache.put(&tok, lifetime).await;
        }
        Ok(tok)
    }
}

// ── Static (tests) ────────────────────────────────────────────────────────────

pub struct StaticToken(pub String);

#[async_trait]
impl TokenCredential for StaticToken {
    async fn token(&self) -> Result<String, CredentialError> {
        Ok(self.0.clone())
    }
}

// ── DefaultCredential ─────────────────────────────────────────────────────────

/// The ambient credential chain, resolved once from an [`AmbientEnv`].
pub struct DefaultCredential {
    inner:  Box<dyn TokenCredential>,
    source: &'static str,
}

impl DefaultCredential {
    /// Select a credential source:
    /// 1. `AZURE_CLIENT_SECRET` (or `ARM_CLIENT_SECRET`) with tenant and client id → Service Principal
    /// 2. `AZURE_FEDERATED_TOKEN_FILE` with tenant and client id → Workload Identity
    /// 3. `IDENTITY_ENDPOINT` + `IDENTITY_HEADER` → App Service managed identity
    /// 4. `AZURE_USE_MSI` / `ARM_USE_MSI`, or `AZURE_POD_IDENTITY_AUTHORITY_HOST` → IMDS managed identity
    /// 5. `az` on `PATH` → Azure CLI (`az account get-access-token`)
    /// 6. otherwise → IMDS managed identity
    ///
    /// Tokens are requested for `audience` (the management endpoint of the
    /// target cloud). A secret or federated token file without its tenant or
    /// client id is an error rather than a silent fall-through.
    pub fn from_env(
        env: &AmbientEnv,
        login_endpoint: &str,
        audience: &str,
        client: reqwest::Client,
    ) -> Result<Self, CredentialError> {
        let tenant_id = env.first_of(&["AZURE_TENANT_ID", "ARM_TENANT_ID"]);
        let client_id = env.first_of(&["AZURE_CLIENT_ID", "ARM_CLIENT_ID"]);
        let secret = env.first_of(&["AZURE_CLIENT_SECRET", "ARM_CLIENT_SECRET"]);
        let federated = env.get("AZURE_FEDERATED_TOKEN_FILE");
        let audience = audience.trim_end_matches('/').to_string();

        let imds = |host: &str, client: reqwest::Client, audience: String| -> Box<dyn TokenCredential> {
            Box::new(ManagedIdentityCredential {
                endpoint: IdentityEndpoint::Imds { host: host.trim_end_matches('/').to_string() },
                client_id: client_id.map(str::to_string),
                audience,
                client,
                cache: TokenCache::new(),
            })
        };

        let (inner, source): (Box<dyn TokenCredential>, &'static str) = if let Some(secret) = secret {
            let tenant_id = tenant_id.ok_or(CredentialError::Incomplete("AZURE_TENANT_ID"))?;
            let client_id = client_id.ok_or(CredentialError::Incomplete("AZURE_CLIENT_ID"))?;
            (
                Box::new(ClientCredential {
                    tenant_id:  tenant_id.to_string(),
                    client_id:  client_id.to_string(),
                    proof:      ClientProof::Secret(secret.to_string()),
                    login_base: login_endpoint.trim_end_matches('/').to_string(),
                    audience,
                    client,
                    cache:      TokenCache::new(),
                }),
                "service-principal",
            )
        } else if let Some(token_file) = federated {
            let tenant_id = tenant_id.ok_or(CredentialError::Incomplete("AZURE_TENANT_ID"))?;
            let client_id = client_id.ok_or(CredentialError::Incomplete("AZURE_CLIENT_ID"))?;
            // The workload identity webhook injects the authority for the cluster's cloud.
            let login_base = env.get("AZURE_AUTHORITY_HOST").unwrap_or(login_endpoint);
            (
                Box::new(ClientCredential {
                    tenant_id:  tenant_id.to_string(),
                    client_id:  client_id.to_string(),
                    proof:      ClientProof::FederatedTokenFile(PathBuf::from(token_file)),
                    login_base: login_base.trim_end_matches('/').to_string(),
                    audience,
                    client,
                    cache:      TokenCache::new(),
                }),
                "workload-identity",
            )
        } else if let (Some(endpoint), Some(header)) =
            (env.get("IDENTITY_ENDPOINT"), env.get("IDENTITY_HEADER"))
        {
            (
                Box::new(ManagedIdentityCredential {
                    endpoint: IdentityEndpoint::AppService {
                        endpoint: endpoint.to_string(),
                        header:   header.to_string(),
                    },
                    client_id: client_id.map(str::to_string),
                    audience,
                    client,
                    cache: TokenCache::new(),
                }),
                "managed-identity",
            )
        } else if env.flag(&["AZURE_USE_MSI", "ARM_USE_MSI"])
            || env.get("AZURE_POD_IDENTITY_AUTHORITY_HOST").is_some()
        {
            let host = env.get("AZURE_POD_IDENTITY_AUTHORITY_HOST").unwrap_or(IMDS_HOST);
            (imds(host, client, audience), "managed-identity")
        } else if let Some(program) = env.find_on_path("az") {
            (
                Box::new(AzureCliCredential {
                    program,
                    tenant_id: tenant_id.map(str::to_string),
                    audience,
                    cache: TokenCache::new(),
                }),
                "azure-cli",
            )
        } else {
            // Without an explicit source, a VM or AKS node's metadata
            // endpoint is the last resort. Off Azure the token request fails
            // at the first lookup.
            (imds(IMDS_HOST, client, audience), "managed-identity")
        };

        info!(source, "Azure credential source selected");
        Ok(Self { inner, source })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }
}

#[async_trait]
impl TokenCredential for DefaultCredential {
    async fn token(&self) -> Result<String, CredentialError> {
        self.inner.token().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    const ARM: &str = "https://management.azure.com";

    fn sp_env() -> AmbientEnv {
        AmbientEnv::from_pairs([
            ("AZURE_TENANT_ID", "test-tenant"),
            ("AZURE_CLIENT_ID", "test-client"),
            ("AZURE_CLIENT_SECRET", "test-secret"),
        ])
    }

    // ── selection ─────────────────────────────────────────────────────────────

    #[test]
    fn selects_service_principal() {
        let cred = DefaultCredential::from_env(&sp_env(), "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.source(), "service-principal");
    }

    #[test]
    fn arm_prefixed_variables_are_accepted() {
        let env = AmbientEnv::from_pairs([
            ("ARM_TENANT_ID", "t"),
            ("ARM_CLIENT_ID", "c"),
            ("ARM_CLIENT_SECRET", "s"),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.source(), "service-principal");
    }

    #[test]
    fn secret_without_tenant_is_incomplete() {
        let env = AmbientEnv::from_pairs([("AZURE_CLIENT_ID", "c"), ("AZURE_CLIENT_SECRET", "s")]);
        let err = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new())
            .err()
            .unwrap();
        assert!(matches!(err, CredentialError::Incomplete("AZURE_TENANT_ID")));
    }

    #[test]
    fn selects_app_service_identity() {
        let env = AmbientEnv::from_pairs([
            ("IDENTITY_ENDPOINT", "http://localhost:42356/msi/token"),
            ("IDENTITY_HEADER", "h"),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.source(), "managed-identity");
    }

    #[test]
    fn selects_azure_cli_when_on_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("az"), "").unwrap();
        let env = AmbientEnv::from_pairs([("PATH", dir.path().display().to_string())]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.source(), "azure-cli");
    }

    #[test]
    fn selects_workload_identity_from_federated_token_file() {
        let env = AmbientEnv::from_pairs([
            ("AZURE_TENANT_ID", "t"),
            ("AZURE_CLIENT_ID", "c"),
            ("AZURE_FEDERATED_TOKEN_FILE", "/var/run/secrets/azure/tokens/azure-identity-token"),
            ("PATH", "/nonexistent/bin"),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.source(), "workload-identity");
    }

    #[test]
    fn federated_token_file_without_client_is_incomplete() {
        let env = AmbientEnv::from_pairs([
            ("AZURE_TENANT_ID", "t"),
            ("AZURE_FEDERATED_TOKEN_FILE", "/tmp/token"),
        ]);
        let err = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new())
            .err()
            .unwrap();
        assert!(matches!(err, CredentialError::Incomplete("AZURE_CLIENT_ID")));
    }

    #[test]
    fn secret_takes_precedence_over_federated_token() {
        let env = AmbientEnv::from_pairs([
            ("AZURE_TENANT_ID", "t"),
            ("AZURE_CLIENT_ID", "c"),
            ("AZURE_CLIENT_SECRET", "s"),
            ("AZURE_FEDERATED_TOKEN_FILE", "/tmp/token"),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.source(), "service-principal");
    }

    #[test]
    fn bare_host_falls_back_to_imds() {
        let env = AmbientEnv::from_pairs([("PATH", "/nonexistent/bin")]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.source(), "managed-identity");
    }

    // ── token acquisition ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn service_principal_token_is_cached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test-tenant/oauth2/v2.0/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=test-client"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token_type": "Bearer",
                "expires_in": 3599,
                "access_token": "sp-token"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cred = DefaultCredential::from_env(&sp_env(), &server.uri(), ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.token().await.unwrap(), "sp-token");
        assert_eq!(cred.token().await.unwrap(), "sp-token");
    }

    #[tokio::test]
    async fn service_principal_error_surfaces_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test-tenant/oauth2/v2.0/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "invalid_client",
                "error_description": "AADSTS7000215: Invalid client secret provided."
            })))
            .mount(&server)
            .await;

        let cred = DefaultCredential::from_env(&sp_env(), &server.uri(), ARM, reqwest::Client::new()).unwrap();
        let err = cred.token().await.unwrap_err();
        assert!(err.to_string().contains("AADSTS7000215"), "got: {}", err);
    }

    #[tokio::test]
    async fn imds_token_via_authority_host_override() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/metadata/identity/oauth2/token"))
            .and(header("Metadata", "true"))
            .and(query_param("resource", ARM))
            .and(query_param("client_id", "user-assigned"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "imds-token",
                "expires_in": "86399"
            })))
            .mount(&server)
            .await;

        let env = AmbientEnv::from_pairs([
            ("AZURE_POD_IDENTITY_AUTHORITY_HOST", server.uri()),
            ("AZURE_CLIENT_ID", "user-assigned".to_string()),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.token().await.unwrap(), "imds-token");
    }

    #[tokio::test]
    async fn app_service_token_sends_identity_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/msi/token"))
            .and(header("X-IDENTITY-HEADER", "secret-header"))
            .and(query_param("api-version", "2019-08-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "app-service-token",
                "expires_on": (chrono::Utc::now().timestamp() + 3600).to_string()
            })))
            .mount(&server)
            .await;

        let env = AmbientEnv::from_pairs([
            ("IDENTITY_ENDPOINT", format!("{}/msi/token", server.uri())),
            ("IDENTITY_HEADER", "secret-header".to_string()),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.token().await.unwrap(), "app-service-token");
    }

    #[tokio::test]
    async fn workload_identity_exchanges_federated_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wi-tenant/oauth2/v2.0/token"))
            .and(body_string_contains("client_id=wi-client"))
            .and(body_string_contains("client_assertion=projected-sa-jwt"))
            .and(body_string_contains("jwt-bearer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token_type": "Bearer",
                "expires_in": 3599,
                "access_token": "wi-token"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let token_file = dir.path().join("azure-identity-token");
        std::fs::write(&token_file, "projected-sa-jwt\n").unwrap();
        let env = AmbientEnv::from_pairs([
            ("AZURE_TENANT_ID", "wi-tenant".to_string()),
            ("AZURE_CLIENT_ID", "wi-client".to_string()),
            ("AZURE_FEDERATED_TOKEN_FILE", token_file.display().to_string()),
            ("AZURE_AUTHORITY_HOST", server.uri()),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        assert_eq!(cred.token().await.unwrap(), "wi-token");
        assert_eq!(cred.token().await.unwrap(), "wi-token");
    }

    #[tokio::test]
    async fn missing_federated_token_file_fails_at_token_time() {
        let env = AmbientEnv::from_pairs([
            ("AZURE_TENANT_ID", "t"),
            ("AZURE_CLIENT_ID", "c"),
            ("AZURE_FEDERATED_TOKEN_FILE", "/nonexistent/azure-identity-token"),
        ]);
        let cred = DefaultCredential::from_env(&env, "https://login", ARM, reqwest::Client::new()).unwrap();
        let err = cred.token().await.unwrap_err();
        assert!(err.to_string().contains("read federated token"), "got: {}", err);
    }

    #[tokio::test]
    async fn scope_follows_sovereign_cloud_audience() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/test-tenant/oauth2/v2.0/token"))
            .and(body_string_contains("management.usgovcloudapi.net%2F.default"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "expires_in": 3599,
                "access_token": "gov-token"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cred = DefaultCredential::from_env(
            &sp_env(),
            &server.uri(),
            "https://management.usgovcloudapi.net/",
            reqwest::Client::new(),
        )
        .unwrap();
        assert_eq!(cred.token().await.unwrap(), "gov-token");
    }

    // ── token_lifetime (pure) ─────────────────────────────────────────────────

    #[test]
    fn lifetime_from_expires_in_number_or_string() {
        assert_eq!(token_lifetime(&json!({ "expires_in": 60 })), Some(Duration::from_secs(60)));
        assert_eq!(token_lifetime(&json!({ "expires_in": "120" })), Some(Duration::from_secs(120)));
    }

    #[test]
    fn lifetime_from_past_expires_on_is_none() {
        assert_eq!(token_lifetime(&json!({ "expires_on": 1 })), None);
        assert_eq!(token_lifetime(&json!({})), None);
    }
}
