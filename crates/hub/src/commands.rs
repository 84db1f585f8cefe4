//! Built-in command catalog
//!
//! Every command hub knows about, native or extension, registered once at
//! startup. Only `help`, `--help` and `--list-cmds` are executed by this
//! binary; the rest are described here so that help can be shown for them.

use hub_core::{CommandDescriptor, Registry};

pub fn registry() -> Registry {
    let help = help();

    native_commands()
        .into_iter()
        .chain(extension_commands())
        .fold(Registry::builder(), hub_core::RegistryBuilder::command)
        .command(help.clone())
        .alias("--help", help)
        .command(CommandDescriptor::extension("--list-cmds"))
        .build()
}

fn help() -> CommandDescriptor {
    CommandDescriptor::extension("help")
        .with_summary("Show the help page for a command")
        .with_usage(
            "help hub
             help <COMMAND>
             help hub-<COMMAND> [--plain-text]",
        )
        .with_long(
            "Show the help page for a command.

## Options:
	hub-<COMMAND>
		Use this format to view help for hub extensions to an existing git command.

	--plain-text
		Skip man page lookup mechanism and display plain help text.

## Lookup mechanism:

On systems that have 'man', help pages are looked up in these directories
relative to the hub install prefix:

* man/<command>.1
* share/man/man1/<command>.1

On systems without 'man', help pages are looked up using the \".txt\" extension.

## See also:

hub(1), git-help(1)",
        )
}

fn native_commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::native("api")
            .with_summary("Low-level GitHub API request interface")
            .with_usage("api [-it] [-X <METHOD>] [-H <HEADER>] [--cache <TTL>] <ENDPOINT> [-F <FIELD>|--input <FILE>]")
            .with_long("Low-level GitHub API request interface.\n\nMakes an authenticated HTTP request to the GitHub API and prints the response."),
        CommandDescriptor::native("browse")
            .with_summary("Open a GitHub page in the default browser")
            .with_usage("browse [-uc] [[<USER>/]<REPOSITORY>|--] [<SUBPAGE>]")
            .with_long("Open a GitHub repository in a web browser."),
        CommandDescriptor::native("ci-status")
            .with_summary("Show the status of GitHub checks for a commit")
            .with_usage("ci-status [-v] [<COMMIT>]")
            .with_long("Display status of GitHub checks for a commit."),
        CommandDescriptor::native("compare")
            .with_summary("Open a compare page on GitHub")
            .with_usage("compare [-uc] [-b <BASE>]\n compare [-uc] [<USER>] [[<START>...]<END>]")
            .with_long("Open a GitHub compare page in a web browser."),
        CommandDescriptor::native("create")
            .with_summary("Create this repository on GitHub and add GitHub as origin")
            .with_usage("create [-poc] [-d <DESCRIPTION>] [-h <HOMEPAGE>] [[<ORGANIZATION>/]<NAME>]")
            .with_long("Create a new repository on GitHub and add a git remote for it."),
        CommandDescriptor::native("delete")
            .with_summary("Delete a repository on GitHub")
            .with_usage("delete [-y] [<ORGANIZATION>/]<NAME>")
            .with_long("Delete an existing repository on GitHub."),
        CommandDescriptor::native("fork")
            .with_summary("Make a fork of a remote repository on GitHub and add as remote")
            .with_usage("fork [--no-remote] [--remote-name <REMOTE>] [--org <ORGANIZATION>]")
            .with_long("Fork the current repository on GitHub and add a git remote for it."),
        CommandDescriptor::native("gist")
            .with_summary("Make a gist")
            .with_usage("gist create [-oc] [--public] [<FILES>...]\ngist [-u] <ID> [<FILENAME>]")
            .with_long("Create and print GitHub Gists."),
        CommandDescriptor::native("issue")
            .with_summary("List or create GitHub issues")
            .with_usage("issue [-a <ASSIGNEE>] [-c <CREATOR>] [-@ <USER>] [-s <STATE>] [-f <FORMAT>]\nissue show [-f <FORMAT>] <NUMBER>\nissue create [-oc] [-m <MESSAGE>|-F <FILE>] [-a <USERS>] [-M <MILESTONE>] [-l <LABELS>]")
            .with_long("Manage GitHub Issues for the current repository."),
        CommandDescriptor::native("pr")
            .with_summary("List or checkout GitHub pull requests")
            .with_usage("pr list [-s <STATE>] [-h <HEAD>] [-b <BASE>] [-o <SORT_KEY> [-^]] [-f <FORMAT>] [-L <LIMIT>]\npr checkout <PR-NUMBER> [<BRANCH>]\npr show [-uc] [-f <FORMAT>] [-h <HEAD>]")
            .with_long("Manage GitHub Pull Requests for the current repository."),
        CommandDescriptor::native("pull-request")
            .with_summary("Open a pull request on GitHub")
            .with_usage("pull-request [-focpd] [-b <BASE>] [-h <HEAD>] [-r <REVIEWERS> ] [-a <ASSIGNEES>] [-M <MILESTONE>] [-l <LABELS>]")
            .with_long("Create a GitHub Pull Request."),
        CommandDescriptor::native("release")
            .with_summary("List or create GitHub releases")
            .with_usage("release [--include-drafts] [--exclude-prereleases] [-L <LIMIT>] [-f <FORMAT>]\nrelease show [-f <FORMAT>] <TAG>\nrelease create [-dpoc] [-a <FILE>] [-m <MESSAGE>|-F <FILE>] [-t <TARGET>] <TAG>")
            .with_long("Manage GitHub Releases for the current repository."),
        CommandDescriptor::native("sync")
            .with_summary("Fetch git objects from upstream and update branches")
            .with_usage("sync [--color]")
            .with_long("Fetch git objects from upstream and update local branches."),
    ]
}

fn extension_commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::extension("am")
            .with_usage("am [-3] <GITHUB-URL>")
            .with_long("Replicate commits locally from a GitHub pull request URL."),
        CommandDescriptor::extension("apply")
            .with_usage("apply <GITHUB-URL>")
            .with_long("Download a patch from GitHub and apply it locally."),
        CommandDescriptor::extension("checkout")
            .with_usage("checkout <PULLREQ-URL> [<BRANCH>]")
            .with_long("Check out a pull request for local review."),
        CommandDescriptor::extension("cherry-pick")
            .with_usage("cherry-pick <COMMIT-URL>\ncherry-pick <USER>@<SHA>")
            .with_long("Cherry-pick a commit from a fork on GitHub."),
        CommandDescriptor::extension("clone")
            .with_usage("clone [-p] [<OPTIONS>] [<USER>/]<REPOSITORY> [<DESTINATION>]")
            .with_long("Clone a repository from GitHub."),
        CommandDescriptor::extension("fetch")
            .with_usage("fetch <USER>[,<USER2>...]")
            .with_long("Add missing remotes prior to performing git fetch."),
        CommandDescriptor::extension("init")
            .with_usage("init -g")
            .with_long("Initialize a git repository and add a remote pointing to GitHub."),
        CommandDescriptor::extension("merge")
            .with_usage("merge <PULLREQ-URL>")
            .with_long("Merge a pull request locally with a message like the GitHub Merge Button."),
        CommandDescriptor::extension("push")
            .with_usage("push <REMOTE>[,<REMOTE2>...] [<REF>]")
            .with_long("Push a git branch to each of the listed remotes."),
        CommandDescriptor::extension("remote")
            .with_usage("remote add [-p] [<OPTIONS>] <USER>[/<REPOSITORY>]\nremote set-url [-p] [<OPTIONS>] <NAME> <USER>[/<REPOSITORY>]")
            .with_long("Add a git remote for a GitHub repository."),
        CommandDescriptor::extension("submodule")
            .with_usage("submodule add [-p] [<OPTIONS>] [<USER>/]<REPOSITORY> <DESTINATION>")
            .with_long("Add a git submodule for a GitHub repository."),
    ]
}
