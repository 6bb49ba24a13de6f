mod types;
mod update;
mod store;
mod seed;
mod search;
mod display;
mod error;

pub use types::*;
pub use update::{
    find_member,
    find_parent,
    path_to,
    depth_of,
    collect_members,
    duplicate_ids,
    with_child_added,
    with_member_patched,
    with_member_removed,
    with_child_moved,
};
pub use store::TreeStore;
pub use seed::{seed_root, seed_data};
pub use search::{search_members, MemberMatch, MatchField};
pub use display::{display_name, spouse_line, lifespan};
pub use error::TreeError;
