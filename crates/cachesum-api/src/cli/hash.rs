//! `cachesum hash` -- one-off digest through the same orchestrator the
//! server uses, against the local store.

use std::str::FromStr;

use tokio_util::sync::CancellationToken;

use cachesum_types::digest::DigestAlgorithm;

use crate::state::AppState;

pub async fn hash(
    state: &AppState,
    input: &str,
    algorithm: &str,
    json: bool,
) -> anyhow::Result<()> {
    let algorithm = DigestAlgorithm::from_str(algorithm)?;
    let cancel = CancellationToken::new();

    let digest = state
        .digest_service
        .compute_or_fetch(input, algorithm, &cancel)
        .await?;

    if json {
        let out = serde_json::json!({
            "input": digest.input(),
            "algorithm": digest.algorithm().as_str(),
            "hash": digest.digest(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", digest.digest());
    }

    Ok(())
}
