//! CREATE, DROP and ALTER grammar for keyspaces, tables and indexes.

use crate::ast::{
    AlterKeyspaceStatement, AlterTableAction, AlterTableStatement, ColumnOrderings,
    CreateIndexStatement, CreateKeyspaceStatement, CreateTableStatement, DropIndexStatement,
    DropKeyspaceStatement, DropTableStatement, PropertyDefinitions, SortOrder, Statement,
};
use crate::lexer::token::TokenKind;
use crate::parser::{Halt, Parser, RuleResult};
use smol_str::SmolStr;

impl Parser {
    /// Eats `TABLE` or its synonym `COLUMNFAMILY`.
    fn eat_table_keyword(&mut self) -> bool {
        self.eat(&TokenKind::Table) || self.eat(&TokenKind::ColumnFamily)
    }

    /// Index names are plain identifiers, kept as written.
    fn parse_index_name(&mut self) -> RuleResult<SmolStr> {
        match self.peek_kind() {
            TokenKind::Identifier(_) => Ok(self.advance().text),
            _ => {
                self.expected_token("index name", "");
                Err(Halt::Recorded)
            }
        }
    }

    /// `CREATE (KEYSPACE | TABLE | COLUMNFAMILY | INDEX) ...`
    pub(crate) fn parse_create(&mut self) -> RuleResult<Statement> {
        self.expect(&TokenKind::Create, "")?;
        if self.eat(&TokenKind::Keyspace) {
            let keyspace = self.parse_keyspace_name()?;
            self.expect(&TokenKind::With, "after keyspace name")?;
            let properties = self.parse_properties()?;
            return Ok(Statement::CreateKeyspace(CreateKeyspaceStatement {
                keyspace,
                properties,
            }));
        }
        if self.eat_table_keyword() {
            return self.parse_create_table().map(Statement::CreateTable);
        }
        if self.eat(&TokenKind::Index) {
            return self.parse_create_index().map(Statement::CreateIndex);
        }
        self.expected_token("KEYSPACE, TABLE or INDEX", "after CREATE");
        Err(Halt::Recorded)
    }

    /// ```text
    /// cf '(' columnDef (',' columnDef?)* ')'
    /// (WITH tableProperty (AND tableProperty)*)?
    /// ```
    fn parse_create_table(&mut self) -> RuleResult<CreateTableStatement> {
        let table = self.parse_cf_name()?;
        let mut statement = CreateTableStatement {
            table,
            definitions: Vec::new(),
            key_aliases: Vec::new(),
            column_aliases: Vec::new(),
            properties: PropertyDefinitions::new(),
            compact_storage: false,
            clustering_order: ColumnOrderings::new(),
        };

        self.expect(&TokenKind::LParen, "to open column definitions")?;
        loop {
            if let Err(halt) = self.parse_column_definition(&mut statement) {
                if halt == Halt::Fatal {
                    return Err(halt);
                }
                self.recover_to(&[TokenKind::Comma, TokenKind::RParen]);
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
            if self.at(&TokenKind::RParen) {
                break;
            }
        }
        self.expect(&TokenKind::RParen, "to close column definitions")?;

        if self.eat(&TokenKind::With) {
            loop {
                if let Err(halt) = self.parse_table_property(&mut statement) {
                    if halt == Halt::Fatal {
                        return Err(halt);
                    }
                    self.synchronize_in_list(&TokenKind::And);
                }
                if !self.eat(&TokenKind::And) {
                    break;
                }
            }
        }

        Ok(statement)
    }

    /// `cident type (PRIMARY KEY)?` or
    /// `PRIMARY KEY '(' (cident | '(' cident (',' cident)* ')') (',' cident)* ')'`
    fn parse_column_definition(&mut self, statement: &mut CreateTableStatement) -> RuleResult<()> {
        if self.eat(&TokenKind::Primary) {
            self.expect(&TokenKind::Key, "after PRIMARY")?;
            self.expect(&TokenKind::LParen, "after PRIMARY KEY")?;
            if self.eat(&TokenKind::LParen) {
                let partition = self.parse_identifier_list("in partition key")?;
                self.expect(&TokenKind::RParen, "to close partition key")?;
                statement.key_aliases.push(partition);
            } else {
                let key = self.parse_identifier("in PRIMARY KEY")?;
                statement.key_aliases.push(vec![key]);
            }
            while self.eat(&TokenKind::Comma) {
                let column = self.parse_identifier("in PRIMARY KEY")?;
                statement.column_aliases.push(column);
            }
            self.expect(&TokenKind::RParen, "to close PRIMARY KEY")?;
            return Ok(());
        }

        let column = self.parse_identifier("for column name")?;
        let validator = self.parse_type()?;
        if self.eat(&TokenKind::Primary) {
            self.expect(&TokenKind::Key, "after PRIMARY")?;
            statement.key_aliases.push(vec![column.clone()]);
        }
        statement.definitions.push((column, validator));
        Ok(())
    }

    /// `property | COMPACT STORAGE | CLUSTERING ORDER BY '(' ordering (',' ordering)* ')'`
    ///
    /// `COMPACT` and `CLUSTERING` are also valid property names; the keyword
    /// forms need their second word.
    fn parse_table_property(&mut self, statement: &mut CreateTableStatement) -> RuleResult<()> {
        if self.at(&TokenKind::Compact) && self.stream.check_nth(1, &TokenKind::Storage) {
            self.advance();
            self.advance();
            statement.compact_storage = true;
            return Ok(());
        }

        if self.at(&TokenKind::Clustering) && self.stream.check_nth(1, &TokenKind::Order) {
            self.advance();
            self.advance();
            self.expect(&TokenKind::By, "after CLUSTERING ORDER")?;
            self.expect(&TokenKind::LParen, "after CLUSTERING ORDER BY")?;
            loop {
                let column = self.parse_identifier("in CLUSTERING ORDER")?;
                let order = match self.peek_kind() {
                    TokenKind::Asc => SortOrder::Asc,
                    TokenKind::Desc => SortOrder::Desc,
                    _ => {
                        self.expected_token("ASC or DESC", &format!("after {column}"));
                        return Err(Halt::Recorded);
                    }
                };
                self.advance();
                statement.clustering_order.insert(column, order);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RParen, "to close CLUSTERING ORDER")?;
            return Ok(());
        }

        self.parse_property(&mut statement.properties)
    }

    /// `INDEX name? ON cf '(' cident ')'` after `CREATE INDEX`.
    fn parse_create_index(&mut self) -> RuleResult<CreateIndexStatement> {
        let name = if self.at(&TokenKind::On) {
            None
        } else {
            Some(self.parse_index_name()?)
        };
        self.expect(&TokenKind::On, "in CREATE INDEX")?;
        let table = self.parse_cf_name()?;
        self.expect(&TokenKind::LParen, "after table name")?;
        let column = self.parse_identifier("for indexed column")?;
        self.expect(&TokenKind::RParen, "after indexed column")?;
        Ok(CreateIndexStatement {
            name,
            table,
            column,
        })
    }

    /// `DROP (KEYSPACE ks | TABLE cf | COLUMNFAMILY cf | INDEX name)`
    pub(crate) fn parse_drop(&mut self) -> RuleResult<Statement> {
        self.expect(&TokenKind::Drop, "")?;
        if self.eat(&TokenKind::Keyspace) {
            let keyspace = self.parse_keyspace_name()?;
            return Ok(Statement::DropKeyspace(DropKeyspaceStatement { keyspace }));
        }
        if self.eat_table_keyword() {
            let table = self.parse_cf_name()?;
            return Ok(Statement::DropTable(DropTableStatement { table }));
        }
        if self.eat(&TokenKind::Index) {
            let name = self.parse_index_name()?;
            return Ok(Statement::DropIndex(DropIndexStatement { name }));
        }
        self.expected_token("KEYSPACE, TABLE or INDEX", "after DROP");
        Err(Halt::Recorded)
    }

    /// `ALTER (TABLE | COLUMNFAMILY) cf action` or `ALTER KEYSPACE ks WITH properties`
    pub(crate) fn parse_alter(&mut self) -> RuleResult<Statement> {
        self.expect(&TokenKind::Alter, "")?;
        if self.eat(&TokenKind::Keyspace) {
            let keyspace = self.parse_keyspace_name()?;
            self.expect(&TokenKind::With, "after keyspace name")?;
            let properties = self.parse_properties()?;
            return Ok(Statement::AlterKeyspace(AlterKeyspaceStatement {
                keyspace,
                properties,
            }));
        }
        if !self.eat_table_keyword() {
            self.expected_token("KEYSPACE or TABLE", "after ALTER");
            return Err(Halt::Recorded);
        }

        let table = self.parse_cf_name()?;
        let action = self.parse_alter_table_action()?;
        Ok(Statement::AlterTable(AlterTableStatement { table, action }))
    }

    /// Exactly one of the five ALTER TABLE forms.
    fn parse_alter_table_action(&mut self) -> RuleResult<AlterTableAction> {
        match self.peek_kind() {
            TokenKind::Alter => {
                self.advance();
                let column = self.parse_identifier("after ALTER")?;
                self.expect(&TokenKind::Type, "after column name")?;
                let validator = self.parse_type()?;
                Ok(AlterTableAction::Alter { column, validator })
            }
            TokenKind::Add => {
                self.advance();
                let column = self.parse_identifier("after ADD")?;
                let validator = self.parse_type()?;
                Ok(AlterTableAction::Add { column, validator })
            }
            TokenKind::Drop => {
                self.advance();
                let column = self.parse_identifier("after DROP")?;
                Ok(AlterTableAction::Drop { column })
            }
            TokenKind::With => {
                self.advance();
                Ok(AlterTableAction::WithProperties(self.parse_properties()?))
            }
            TokenKind::Rename => {
                self.advance();
                let mut renames = Vec::new();
                loop {
                    let from = self.parse_identifier("after RENAME")?;
                    self.expect(&TokenKind::To, "in RENAME")?;
                    let to = self.parse_identifier("after TO")?;
                    renames.push((from, to));
                    if !self.eat(&TokenKind::And) {
                        break;
                    }
                }
                Ok(AlterTableAction::Rename(renames))
            }
            _ => {
                self.expected_token("ALTER, ADD, DROP, WITH or RENAME", "in ALTER TABLE");
                Err(Halt::Recorded)
            }
        }
    }
}
