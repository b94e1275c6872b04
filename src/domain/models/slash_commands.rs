#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_translate()
            || cmd.is_summarize()
            || cmd.is_swap()
            || cmd.is_source()
            || cmd.is_target()
            || cmd.is_history()
            || cmd.is_clear_history()
            || cmd.is_restore()
            || cmd.is_languages()
            || cmd.is_dark_mode()
        {
            return Some(cmd);
        }

        return None;
    }

    /// First argument, if any.
    pub fn arg(&self) -> Option<&str> {
        return self.args.first().map(|e| return e.as_str());
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_translate(&self) -> bool {
        return ["/t", "/translate"].contains(&self.command.as_str());
    }

    pub fn is_summarize(&self) -> bool {
        return ["/s", "/summarize"].contains(&self.command.as_str());
    }

    pub fn is_swap(&self) -> bool {
        return self.command == "/swap";
    }

    pub fn is_source(&self) -> bool {
        return ["/source", "/from"].contains(&self.command.as_str());
    }

    pub fn is_target(&self) -> bool {
        return ["/target", "/to"].contains(&self.command.as_str());
    }

    pub fn is_history(&self) -> bool {
        return ["/hi", "/history"].contains(&self.command.as_str());
    }

    pub fn is_clear_history(&self) -> bool {
        return self.command == "/clear";
    }

    pub fn is_restore(&self) -> bool {
        return ["/r", "/restore"].contains(&self.command.as_str());
    }

    pub fn is_languages(&self) -> bool {
        return ["/l", "/languages"].contains(&self.command.as_str());
    }

    pub fn is_dark_mode(&self) -> bool {
        return ["/dark", "/darkmode"].contains(&self.command.as_str());
    }
}
