use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{AuthResponse, Claims, LoginRequest, MeResponse, RegisterRequest},
        orders::CreateOrderRequest,
        providers::ProviderListing,
    },
    error::ErrorBody,
    models::{Order, Provider, User},
    routes::{auth, health, orders, providers},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::banner,
        health::health_check,
        auth::register,
        auth::login,
        auth::me,
        providers::list_providers,
        orders::create_order,
    ),
    components(
        schemas(
            User,
            Provider,
            ProviderListing,
            Order,
            Claims,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            MeResponse,
            CreateOrderRequest,
            ErrorBody,
            health::Banner,
            health::HealthData,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Banner and health check"),
        (name = "Auth", description = "Registration, login and session"),
        (name = "Providers", description = "Provider directory"),
        (name = "Orders", description = "Order submission"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/health",
            "/api/auth/register",
            "/api/auth/login",
            "/api/me",
            "/api/providers",
            "/api/orders",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
