use crate::{api, error, info, management::LibraryManager};

/// Displays various information about the bookshelf server and collection.
///
/// Executes in priority order and returns after the first match:
/// 1. Featured ISBN set (if `featured` is true)
/// 2. Server health (if `health` is true)
/// 3. Collection count (if `count` is true)
pub async fn info(featured: bool, health: bool, count: bool) {
    if featured {
        match api::books::featured().await {
            Ok(isbns) => {
                if isbns.is_empty() {
                    info!("No featured books.");
                } else {
                    info!("Featured ISBNs:");
                    for isbn in isbns {
                        println!("  {}", isbn);
                    }
                }
            }
            Err(e) => error!("Failed to load featured books. Err: {}", e),
        }
        return;
    }

    if health {
        match api::health::health().await {
            Ok(doc) => {
                let field = |key: &str| {
                    doc.get(key)
                        .and_then(|v| v.as_str())
                        .unwrap_or("unknown")
                        .to_string()
                };
                info!("Server status: {}", field("status"));
                info!("Service: {}", field("service"));
                info!("Version: {}", field("version"));
                info!("Storage: {}", field("storage"));
            }
            Err(e) => error!("Bookshelf server unreachable. Err: {}", e),
        }
        return;
    }

    if count {
        match LibraryManager::refresh(None).await {
            Ok(library) => info!("Books in library: {}", library.count()),
            Err(e) => error!("Failed to load books. Err: {}", e),
        }
    }
}
