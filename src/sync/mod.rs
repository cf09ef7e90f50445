//! Remote retrieval helpers: scp command strings and folder information
//!
//! Generated figure folders carry a `sync_me.sh` so a paper repository on
//! another machine can pull the figure (scripts, data and Makefile) with a
//! single scp call.

use std::path::Path;

use anyhow::Result;

use crate::utils::{get_hostname, get_username};

/// Retrieval commands for one figure folder, derived from the current user
/// and the machine hostname
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshInfo {
    /// `user@host:/absolute/figure/dir`
    pub ssh_target: String,
    /// Pulls the whole folder: `scp -r user@host:dir .`
    pub scp_command: String,
    /// Pulls the folder contents only, used by `sync_me.sh`
    pub scp_command_contents: String,
}

impl SshInfo {
    /// Build retrieval info for an absolute figure directory. A hostname
    /// override replaces the system name when that one is not reachable
    /// from the outside.
    pub fn for_folder(absolute_dir: &Path, hostname_override: Option<&str>) -> Result<Self> {
        let user = get_username()?;
        let host = match hostname_override {
            Some(name) => name.to_string(),
            None => get_hostname()?,
        };

        let ssh_target = format!("{}@{}:{}", user, host, absolute_dir.display());
        let scp_command = format!("scp -r {} .", ssh_target);
        let scp_command_contents = format!("scp -r {}/* .", ssh_target);

        Ok(Self { ssh_target, scp_command, scp_command_contents })
    }

    /// One-liner writing a retrieval script and running it, shown by
    /// `folder_info`
    pub fn autosync_command(&self, folder_name: &str) -> String {
        let script_tag = folder_name.replace('/', "__");
        format!(
            "echo '{}' > retrieve_{}.sh ; bash retrieve_{}.sh ",
            self.scp_command, script_tag, script_tag
        )
    }
}

/// Human-readable description of a figure folder and how to retrieve it
#[derive(Debug, Clone)]
pub struct FolderInfo {
    pub local_folder: String,
    pub absolute_folder: String,
    pub ssh_target: String,
    pub autosync: String,
}

impl FolderInfo {
    pub fn new(local_folder: &str, absolute_dir: &Path, ssh: &SshInfo) -> Self {
        Self {
            local_folder: local_folder.to_string(),
            absolute_folder: absolute_dir.display().to_string(),
            ssh_target: ssh.ssh_target.clone(),
            autosync: ssh.autosync_command(local_folder),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "(folder local): {}\n(folder global): {}\n(ssh): {}\n(autosync): {}\n",
            self.local_folder, self.absolute_folder, self.ssh_target, self.autosync
        )
    }
}
