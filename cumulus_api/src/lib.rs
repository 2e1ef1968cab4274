pub mod accounts;
pub mod dns_analytics;
pub mod members;
pub mod roles;
pub mod shared;
pub mod user;

pub mod prelude {
    pub use crate::accounts::{Account, AccountSettings, AccountType, CreateAccount, UpdateAccount};
    pub use crate::dns_analytics::{DnsReport, DnsReportQuery, DnsReportRow};
    pub use crate::members::{
        Member, MemberInfo, MemberSort, MemberStatus, MemberUpdate, NewMember, PermissionGrant,
        Policy,
    };
    pub use crate::roles::{Role, RolePermissions};
    pub use crate::shared::{Id, Key};
    pub use crate::user::{EditUser, User};
    pub use cumulus_core::prelude::*;
}
