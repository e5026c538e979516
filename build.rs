use git2::Repository;
use git2::Status;

fn is_index_status(status: &Status) -> bool {
    status.intersects(
        Status::INDEX_DELETED
            | Status::INDEX_MODIFIED
            | Status::INDEX_NEW
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE,
    )
}

fn is_workdir_status(status: &Status) -> bool {
    status.intersects(
        Status::WT_DELETED
            | Status::WT_MODIFIED
            | Status::WT_NEW
            | Status::WT_RENAMED
            | Status::WT_TYPECHANGE,
    )
}

fn main() {
    let repo = Repository::discover(".").ok();
    println!("cargo:rustc-env=GIT_BUILD_HASH={}", git_hash(repo.as_ref()));
    println!("cargo:rustc-env=GIT_BUILD_TAINT={}", git_taint(repo.as_ref()));
}

fn git_hash(repo: Option<&Repository>) -> String {
    repo.and_then(|repo| repo.revparse_single("HEAD").ok())
        .map(|checkout| checkout.id().to_string())
        .unwrap_or_else(|| String::from("unknown"))
}

fn git_taint(repo: Option<&Repository>) -> String {
    let statuses = match repo.and_then(|repo| repo.statuses(None).ok()) {
        None => return String::from("unknown taint"),
        Some(statuses) => statuses,
    };
    let mut index_changed = false;
    let mut workdir_changed = false;

    for entry in statuses.iter() {
        let status = entry.status();
        if is_index_status(&status) {
            index_changed = true;
        }
        if is_workdir_status(&status) {
            workdir_changed = true;
        }
    }

    match (index_changed, workdir_changed) {
        (true, true) => String::from("index and working directory tainted"),
        (true, false) => String::from("index tainted"),
        (false, true) => String::from("working directory tainted"),
        (false, false) => String::from("not tainted"),
    }
}
