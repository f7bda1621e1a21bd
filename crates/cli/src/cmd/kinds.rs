use noticeblocks_core::registered_kinds;
use tracing::debug;

pub fn run() {
    debug!(count = registered_kinds().len(), "listing notice kinds");
    for kind in registered_kinds() {
        println!("{kind}\t{{% {kind} %}}...{{% {} %}}", kind.end_tag());
    }
}
