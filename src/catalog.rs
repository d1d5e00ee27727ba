use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use lazy_static::lazy_static;

// Mnemonic -> (group index, form index)
type FxMap<K, V> = IndexMap<K, V, FxBuildHasher>;

lazy_static! {
    static ref GLOBAL: Catalog = Catalog::new(LC3_TABLE);
}

/// One spelling of an instruction together with its operand layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Form {
    pub mnemonic: &'static str,
    /// Empty for instructions without operands.
    pub operands: &'static str,
}

/// A row of the instruction table. Several forms may share one description and example,
/// e.g. `JSR` and `JSRR`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Group {
    pub forms: &'static [Form],
    pub description: &'static str,
    /// Lines separated by `\n`. A leading `\n` puts the whole example on its own line.
    pub example: &'static str,
}

/// Everything known about a single mnemonic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub operands: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

impl Instruction {
    fn new(form: &Form, group: &Group) -> Self {
        Instruction {
            mnemonic: form.mnemonic,
            operands: form.operands,
            description: group.description,
            example: group.example,
        }
    }
}

/// The lines of an example, without the leading break.
pub fn example_lines(example: &'static str) -> impl Iterator<Item = &'static str> {
    example.strip_prefix('\n').unwrap_or(example).split('\n')
}

/// Immutable, ordered table of instructions keyed by exact mnemonic.
///
/// Keys are matched case-sensitively; callers normalize before calling [`Catalog::lookup`].
#[derive(Debug)]
pub struct Catalog {
    groups: &'static [Group],
    index: FxMap<&'static str, (usize, usize)>,
}

impl Catalog {
    /// Build an index over `groups`, keeping table order.
    ///
    /// Panics if a mnemonic appears twice, since lookups must be deterministic.
    pub fn new(groups: &'static [Group]) -> Self {
        let mut index = IndexMap::with_hasher(FxBuildHasher::default());
        for (g, group) in groups.iter().enumerate() {
            for (f, form) in group.forms.iter().enumerate() {
                if index.insert(form.mnemonic, (g, f)).is_some() {
                    panic!("duplicate mnemonic `{}` in instruction table", form.mnemonic);
                }
            }
        }
        Catalog { groups, index }
    }

    /// The LC3 table, built once per process.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    pub fn lookup(&self, mnemonic: &str) -> Option<Instruction> {
        let &(g, f) = self.index.get(mnemonic)?;
        let group = &self.groups[g];
        Some(Instruction::new(&group.forms[f], group))
    }

    pub fn contains(&self, mnemonic: &str) -> bool {
        self.index.contains_key(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Every mnemonic, in table order.
    pub fn iter(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.index.values().map(|&(g, f)| {
            let group = &self.groups[g];
            Instruction::new(&group.forms[f], group)
        })
    }

    pub fn mnemonics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.index.keys().copied()
    }
}

const fn form(mnemonic: &'static str, operands: &'static str) -> Form {
    Form { mnemonic, operands }
}

#[rustfmt::skip]
pub static LC3_TABLE: &[Group] = &[
    Group {
        forms: &[form("AND", "DR, SR, VALUE")],
        description: "If bit [5] is 0, the second source operand is obtained from SR2. If bit [5] is 1, the
second source operand is obtained by sign-extending the imm5 field to 16 bits.
In either case, the second source operand and the contents of SRI are bit-wise
ANDed, and the result stored in DR. The condition codes are set, based on whether
the binary value produced, taken as a 2's complement integer, is negative, zero,
or positive.",
        example: "AND\tR3,R3,0",
    },
    Group {
        forms: &[form("ADD", "DR, SR, VALUE")],
        description: "If bit [5] is 0, the second source operand is obtained from SR2. If bit [5] is 1, the
second source operand is obtained by sign-extending the imm5 field to 16 bits.
In both cases, the second source operand is added to the contents of SRI and the
result stored in DR. The condition codes are set, based on whether the result is
negative, zero, or positive.",
        example: "ADD\tR3,R2,4",
    },
    Group {
        forms: &[form("BR", "LABEL")],
        description: "The condition codes specified by the state of bits [11:9] are tested. If bit [11] is
set, N is tested; if bit [11] is clear, N is not tested. If bit [10] is set, Z is tested, etc.
If any of the condition codes tested is set, the program branches to the location
specified by adding the sign-extended PCoffset9 field to the incremented PC.",
        example: "BR\tLABEL_NAME",
    },
    Group {
        forms: &[form("JMP", "BaseR")],
        description: "The program unconditionally jumps to the location specified by the contents of
the base register. Bits [8:6] identify the base register.",
        example: "JMP\tR2",
    },
    Group {
        forms: &[form("JSR", "LABEL"), form("JSRR", "BaseR")],
        description: "First, the incremented PC is saved in a temporary location. Then the PC is loaded
with the address of the first instruction of the subroutine, causing an unconditional
jump to that address. The address of the subroutine is obtained from the base
register (if bit [11] is 0), or the address is computed by sign-extending bits [10:0]
and adding this value to the incremented PC (if bit [11] is 1). Finally, R7 is loaded
with the value stored in the temporary location. This is the linkage back to the
calling routine.",
        example: "\nJSR\tLABEL_NAME\nJSRR\tR3",
    },
    Group {
        forms: &[form("LD", "DR, LABEL")],
        description: "An address is computed by sign-extending bits [8:0] to 16 bits and adding this
value to the incremented PC. The contents of memory at this address are loaded
into DR. The condition codes are set, based on whether the value loaded is
negative, zero, or positive.",
        example: "LD\tR5,VALUE",
    },
    Group {
        forms: &[form("LDI", "DR, LABEL")],
        description: "An address is computed by sign-extending bits [8:0] to 16 bits and adding this
value to the incremented PC. What is stored in memory at this address is the
address of the data to be loaded into DR. The condition codes are set, based on
whether the value loaded is negative, zero, or positive.",
        example: "LDI\tR5,MY_LABEL",
    },
    Group {
        forms: &[form("LDR", "DR, SR, offset6")],
        description: "An address is computed by sign-extending bits [5:0] to 16 bits and adding this
value to the contents of the register specified by bits [8:6]. The contents of memory
at this address are loaded into DR. The condition codes are set, based on whether
the value loaded is negative, zero, or positive.",
        example: "LDR\tR5,R2,#-5",
    },
    Group {
        forms: &[form("LEA", "DR, LABEL")],
        description: "An address is computed by sign-extending bits [8:0] to 16 bits and adding this
value to the incremented PC. This address is loaded into DR. The condition
codes are set, based on whether the value loaded is negative, zero, or positive.",
        example: "LEA\tR5,MY_LABEL",
    },
    Group {
        forms: &[form("NOT", "DR, SR")],
        description: "The bit-wise complement of the contents of SR is stored in DR. The condition
codes are set, based on whether the binary value produced, taken as a 2's
complement integer, is negative, zero, or positive.",
        example: "NOT\tR5,R3",
    },
    Group {
        forms: &[form("RET", "")],
        description: "The PC is loaded with the value in R7. This causes a return from a previous JSR
instruction.",
        example: "RET ; PC ← R7",
    },
    Group {
        forms: &[form("RTI", "")],
        description: "If the processor is running in Supervisor mode, the top two elements on the
Supervisor Stack are popped and loaded into PC, PSR. If the processor is running
in User mode, a privilege mode violation exception occurs.",
        example: "RTI ; PC,PSR ← top two values popped off stack.",
    },
    Group {
        forms: &[form("ST", "SR, LABEL")],
        description: "The contents of the register specified by SR are stored in the memory location
whose address is computed by sign-extending bits [8:0] to 16 bits and adding this
value to the incremented PC.",
        example: "ST R5, MY_LABEL",
    },
    Group {
        forms: &[form("STI", "SR, LABEL")],
        description: "The contents of the register specified by SR are stored in the memory location
whose address is obtained as follows: Bits [8:0] are sign-extended to 16 bits and
added to the incremented PC. What is in memory at this address is the address of
the location to which the data in SR is stored.",
        example: "STI R5, MY_LABEL",
    },
    Group {
        forms: &[form("STR", "SR, BaseR,offset6")],
        description: "The contents of the register specified by SR are stored in the memory location
whose address is computed by sign-extending bits [5:0] to 16 bits and adding this
value to the contents of the register specified by bits [8:6].",
        example: "STR R4, R2, #5",
    },
    Group {
        forms: &[form("TRAP", "trapvector8")],
        description: "First R7 is loaded with the incremented PC. (This enables a return to the instruction
physically following the TRAP instruction in the original program after the service
routine has completed execution.) Then the PC is loaded with the starting address
of the system call specified by trapvector8. The starting address is contained in
the memory location whose address is obtained by zero-extending trapvector8 to
16 bits.",
        example: "TRAP x23",
    },
    Group {
        forms: &[form("GETC", "")],
        description: "Read a single character from the keyboard. The character is not echoed onto the
console. Its ASCII code is copied into R0. The high eight bits of R0 are cleared.",
        example: "\nGETC\nOUT",
    },
    Group {
        forms: &[form("OUT", "")],
        description: "Write a character in R0[7:0] to the console display.",
        example: "\nGETC\nOUT",
    },
    Group {
        forms: &[form("PUTS", "")],
        description: "Write a string of ASCII characters to the console display. The characters are contained
in consecutive memory locations, one character per memory location, starting with
the address specified in R0. Writing terminates with the occurrence of x0000 in a
memory location.",
        example: "\nLEA\tR0,MY_STRING\nPUTS",
    },
    Group {
        forms: &[form("IN", "")],
        description: "Print a prompt on the screen and read a single character from the keyboard. The
character is echoed onto the console monitor, and its ASCII code is copied into R0.",
        example: "\nIN\nOUT",
    },
    Group {
        forms: &[form("PUTSP", "")],
        description: "Write a string of ASCII characters to the console. The characters are contained in
consecutive memory locations, two characters per memory location, starting with the
address specified in R0. The ASCII code contained in bits [7:0] of a memory location
is written to the console first. Then the ASCII code contained in bits [15:8] of that
memory location is written to the console. (A character string consisting of an odd
number of characters to be written will have x00 in bits [15:8] of the memory
location containing the last character to be written.) Writing terminates with the
occurrence of x0000 in a memory location.",
        example: "\nPUTSP",
    },
    Group {
        forms: &[form("HALT", "")],
        description: "Halt execution and print a message on the console.",
        example: "\n; Some code\nHALT",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mnemonic_resolves_to_its_row() {
        let catalog = Catalog::global();
        for group in LC3_TABLE {
            for form in group.forms {
                let instr = catalog.lookup(form.mnemonic).unwrap();
                assert_eq!(instr.mnemonic, form.mnemonic);
                assert_eq!(instr.operands, form.operands);
                assert_eq!(instr.description, group.description);
                assert_eq!(instr.example, group.example);
            }
        }
        assert_eq!(catalog.len(), 23);
    }

    #[test]
    fn no_prefix_or_case_folding() {
        let catalog = Catalog::global();
        for m in catalog.mnemonics() {
            assert!(catalog.lookup(&format!("{m}extra")).is_none(), "{m}extra");
        }
        assert!(catalog.lookup("add").is_none());
        assert!(catalog.lookup("AD").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn aliases_share_description() {
        let catalog = Catalog::global();
        let jsr = catalog.lookup("JSR").unwrap();
        let jsrr = catalog.lookup("JSRR").unwrap();
        assert_eq!(jsr.description, jsrr.description);
        assert_eq!(jsr.example, jsrr.example);
        assert_eq!(jsr.operands, "LABEL");
        assert_eq!(jsrr.operands, "BaseR");
    }

    #[test]
    fn keeps_table_order() {
        let first: Vec<_> = Catalog::global().mnemonics().take(6).collect();
        assert_eq!(first, ["AND", "ADD", "BR", "JMP", "JSR", "JSRR"]);
        assert_eq!(Catalog::global().mnemonics().last(), Some("HALT"));
    }

    #[test]
    fn splits_example_lines() {
        let jsr = Catalog::global().lookup("JSR").unwrap();
        assert_eq!(
            example_lines(jsr.example).collect::<Vec<_>>(),
            ["JSR\tLABEL_NAME", "JSRR\tR3"]
        );
        let and = Catalog::global().lookup("AND").unwrap();
        assert_eq!(example_lines(and.example).collect::<Vec<_>>(), ["AND\tR3,R3,0"]);
        let putsp = Catalog::global().lookup("PUTSP").unwrap();
        assert_eq!(putsp.example, "\nPUTSP");
        assert_eq!(example_lines(putsp.example).collect::<Vec<_>>(), ["PUTSP"]);
    }

    #[test]
    fn pins_corrected_prose() {
        let catalog = Catalog::global();
        let getc = catalog.lookup("GETC").unwrap();
        assert!(getc.description.ends_with(
            "Its ASCII code is copied into R0. The high eight bits of R0 are cleared."
        ));
        let puts = catalog.lookup("PUTS").unwrap();
        assert!(puts.description.contains("the address specified in R0."));
        assert!(puts.description.contains("occurrence of x0000 in a\nmemory location."));
        let putsp = catalog.lookup("PUTSP").unwrap();
        assert!(putsp.description.contains("will have x00 in bits [15:8] of the memory"));
        let jsr = catalog.lookup("JSR").unwrap();
        assert!(jsr.description.contains("(if bit [11] is 1)"));
        let lea = catalog.lookup("LEA").unwrap();
        assert!(lea.description.contains("This address is loaded into DR. The condition\ncodes"));
        for instr in catalog.iter() {
            assert!(!instr.description.contains("RO"), "{}", instr.mnemonic);
            assert!(!instr.description.contains("xOO"), "{}", instr.mnemonic);
        }
    }

    #[test]
    #[should_panic(expected = "duplicate mnemonic `ADD`")]
    fn rejects_duplicates() {
        static DUP: &[Group] = &[
            Group {
                forms: &[form("ADD", "")],
                description: "",
                example: "",
            },
            Group {
                forms: &[form("ADD", "")],
                description: "",
                example: "",
            },
        ];
        Catalog::new(DUP);
    }
}
