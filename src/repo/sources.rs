//! Data source operations: lifecycle, agent attachments, and file handling.

use std::path::Path;

use tracing::info;

use crate::error::ConsoleError;
use crate::model::{Agent, FileMetadata, Source, UploadJob};
use crate::repo::{decode, decode_list, AgentRepo};
use crate::transport::{invoke, routes, AttachStyle, Transport, Upload};

pub struct SourceRepo<'t, T: Transport> {
    transport: &'t T,
    attach_style: AttachStyle,
}

impl<'t, T: Transport> SourceRepo<'t, T> {
    pub fn new(transport: &'t T, attach_style: AttachStyle) -> Self {
        Self {
            transport,
            attach_style,
        }
    }

    pub fn list(&self) -> Result<Vec<Source>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::list_sources())?,
            "sources",
            "source",
        )
    }

    pub fn get(&self, source_id: &str) -> Result<Source, ConsoleError> {
        decode(
            invoke(self.transport, routes::get_source(source_id))?,
            "source",
        )
    }

    pub fn create(&self, name: &str) -> Result<Source, ConsoleError> {
        let source: Source = decode(
            invoke(self.transport, routes::create_source(name))?,
            "source",
        )?;
        info!(source_id = %source.id, %name, "source created");
        Ok(source)
    }

    pub fn delete(&self, source_id: &str) -> Result<(), ConsoleError> {
        invoke(self.transport, routes::delete_source(source_id))?;
        info!(%source_id, "source deleted");
        Ok(())
    }

    /// Attach a source to an agent. The service happily duplicates the
    /// relationship for a naive caller, so the current attachment state is
    /// re-fetched first and an already-attached pair is refused.
    pub fn attach(&self, source_id: &str, agent_id: &str) -> Result<(), ConsoleError> {
        if self.is_attached(source_id, agent_id)? {
            return Err(ConsoleError::Precondition(format!(
                "source {} is already attached to agent {}",
                source_id, agent_id
            )));
        }
        invoke(
            self.transport,
            routes::attach_source(self.attach_style, source_id, agent_id),
        )?;
        info!(%source_id, %agent_id, "source attached");
        Ok(())
    }

    /// Detach a source from an agent; refused when the pair is not attached.
    pub fn detach(&self, source_id: &str, agent_id: &str) -> Result<(), ConsoleError> {
        if !self.is_attached(source_id, agent_id)? {
            return Err(ConsoleError::Precondition(format!(
                "source {} is not attached to agent {}",
                source_id, agent_id
            )));
        }
        invoke(
            self.transport,
            routes::detach_source(self.attach_style, source_id, agent_id),
        )?;
        info!(%source_id, %agent_id, "source detached");
        Ok(())
    }

    fn is_attached(&self, source_id: &str, agent_id: &str) -> Result<bool, ConsoleError> {
        let attached = AgentRepo::new(self.transport).attached_sources(agent_id)?;
        Ok(attached.iter().any(|s| s.id == source_id))
    }

    /// The service has no reverse index from source to agents; walk the
    /// agent list and check each agent's attachments.
    pub fn attached_agents(&self, source_id: &str) -> Result<Vec<Agent>, ConsoleError> {
        let agents = AgentRepo::new(self.transport);
        let mut attached = Vec::new();
        for agent in agents.list()? {
            if agents
                .attached_sources(&agent.id)?
                .iter()
                .any(|s| s.id == source_id)
            {
                attached.push(agent);
            }
        }
        Ok(attached)
    }

    /// Upload a file into a source. Returns the server's job descriptor;
    /// ingestion completes asynchronously on the remote side.
    pub fn upload_file(&self, source_id: &str, path: &Path) -> Result<UploadJob, ConsoleError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ConsoleError::Validation(format!("cannot read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ConsoleError::Validation(format!("{} has no file name", path.display()))
            })?;
        let job: UploadJob = decode(
            invoke(
                self.transport,
                routes::upload_file(source_id, Upload { file_name, bytes }),
            )?,
            "upload job",
        )?;
        info!(%source_id, job_id = ?job.id, "file upload submitted");
        Ok(job)
    }

    pub fn list_files(&self, source_id: &str) -> Result<Vec<FileMetadata>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::list_files(source_id))?,
            "files",
            "file",
        )
    }

    pub fn delete_file(&self, source_id: &str, file_id: &str) -> Result<(), ConsoleError> {
        invoke(self.transport, routes::delete_file(source_id, file_id))?;
        info!(%source_id, %file_id, "file deleted");
        Ok(())
    }
}
