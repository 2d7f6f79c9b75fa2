use crate::cli::{
    ConfigCommand, CreateArgs, CreateTarget, DeleteTarget, UpdateArgs, UpdateTarget,
};
use crate::config::ProfilePatch;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profiles::{ChangeKind, CreateRequest, ProfileChange, ProfileFields, ProfileService};

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    let change = match command {
        ConfigCommand::Create {
            target: CreateTarget::Reticule(args),
        } => ProfileService::create(&ctx.repository, create_request(args))?,
        ConfigCommand::Update {
            target: UpdateTarget::Reticule(args),
        } => {
            let patch = update_patch(&args);
            ProfileService::update(&ctx.repository, &args.name, &patch)?
        }
        ConfigCommand::Delete {
            target: DeleteTarget::Reticule(args),
        } => ProfileService::delete(&ctx.repository, &args.name)?,
    };

    if change.created_file {
        ctx.output
            .notice(&format!("creating config {:?}", change.config_file.display().to_string()))?;
    }

    ctx.output.emit(&summary(&change), &change)
}

fn create_request(args: CreateArgs) -> CreateRequest {
    CreateRequest {
        name: args.name,
        fields: ProfileFields {
            base_url: args.base_url,
            feed_url: args.feed_url,
            key: args.key,
            passphrase: args.passphrase,
            secret: args.secret,
            bind_address: args.bind_address,
            port: args.port,
            server_secret: args.server_auth,
        },
        make_current: args.use_config,
    }
}

fn update_patch(args: &UpdateArgs) -> ProfilePatch {
    ProfilePatch {
        base_url: args.base_url.clone(),
        feed_url: args.feed_url.clone(),
        key: args.key.clone(),
        passphrase: args.passphrase.clone(),
        secret: args.secret.clone(),
        server_ip: args.bind_address.clone(),
        server_port: args.port,
        server_secret: args.server_auth.clone(),
        rename: args.rename.clone(),
        make_current: args.use_config,
    }
}

fn summary(change: &ProfileChange) -> String {
    let marker = if change.is_current() { " (current)" } else { "" };
    match change.action {
        ChangeKind::Created => format!("created config {:?}{marker}", change.profile),
        ChangeKind::Updated => format!("updated config {:?}{marker}", change.profile),
        ChangeKind::Deleted if change.removed => format!("deleted config {:?}", change.profile),
        ChangeKind::Deleted => format!("config {:?} not present, nothing deleted", change.profile),
    }
}
