//! Minimal artworks API on the resource foundation.
//!
//! Run with `cargo run --example artworks`, then:
//!
//! ```text
//! curl localhost:3000/artworks
//! curl localhost:3000/artworks/2
//! curl "localhost:3000/artworks?ids=1,3&fields=id,title"
//! curl localhost:3000/artworks/on-view
//! curl localhost:3000/artworks/on-view/2
//! ```

use std::sync::Arc;

use axum::Router;
use serde::Serialize;

use rest_foundation::prelude::*;

#[derive(Debug, Clone)]
struct Artwork {
    id: u64,
    title: String,
    artist: String,
    on_view: bool,
}

#[derive(Debug, Serialize)]
struct ArtworkPayload {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<String>,
}

struct ArtworkTransformer {
    fields: Option<FieldSelector>,
}

impl ResponseTransformer<Artwork> for ArtworkTransformer {
    type Output = ArtworkPayload;

    fn with_fields(fields: Option<FieldSelector>) -> Self {
        Self { fields }
    }

    fn transform(&self, artwork: &Artwork) -> ArtworkPayload {
        let wants = |field: &str| self.fields.as_ref().map_or(true, |f| f.contains(field));
        ArtworkPayload {
            id: artwork.id,
            title: wants("title").then(|| artwork.title.clone()),
            artist: wants("artist").then(|| artwork.artist.clone()),
        }
    }
}

struct ArtworkController {
    model: InMemoryModel<Artwork>,
}

impl ResourceController for ArtworkController {
    type Model = InMemoryModel<Artwork>;
    type Transformer = ArtworkTransformer;

    fn model(&self) -> &InMemoryModel<Artwork> {
        &self.model
    }
}

fn artwork(id: u64, title: &str, artist: &str, on_view: bool) -> Artwork {
    Artwork {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        on_view,
    }
}

#[tokio::main]
async fn main() {
    let mut model = InMemoryModel::new().with_scope("on-view", |records: Vec<(String, Artwork)>| {
        records.into_iter().filter(|(_, w)| w.on_view).collect()
    });
    for work in [
        artwork(1, "Nighthawks", "Edward Hopper", true),
        artwork(2, "A Sunday on La Grande Jatte", "Georges Seurat", true),
        artwork(3, "The Old Guitarist", "Pablo Picasso", false),
        artwork(4, "American Gothic", "Grant Wood", true),
    ] {
        let id = work.id.to_string();
        model = model.with_record(id, work);
    }

    let controller = Arc::new(ArtworkController { model });
    let app = Router::new().nest(
        "/artworks",
        scoped_resource_routes(controller, &["on-view"]),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("bind 127.0.0.1:3000");
    println!("listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await.expect("serve");
}
